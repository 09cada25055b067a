use std::ffi::CString;

use eyre::{eyre, Result, WrapErr};

use super::gl_api::{GlApi, Stage};

/// A linked OpenGL program.
///
/// Keeps the list of vertex attribute locations the program reads from,
/// `bind` enables exactly those.
#[derive(Debug)]
pub struct Shader {
    pub id: u32,
    attributes: Vec<u32>,
}

impl Shader {
    /// Compiles both stages and links them into a program.
    /// Every driver object created on the way is released if a step fails.
    pub fn new<G: GlApi + ?Sized>(gl: &G, vs_src: &str, fs_src: &str) -> Result<Shader> {
        let vs = Self::compile_shader(gl, vs_src, Stage::Vertex)?;
        let fs = match Self::compile_shader(gl, fs_src, Stage::Fragment) {
            Ok(fs) => fs,
            Err(e) => {
                gl.delete_shader(vs);
                return Err(e);
            }
        };

        let id = Self::link_shaders(gl, vs, fs)?;
        log::debug!("Linked shader program {id}");

        Ok(Shader {
            id,
            attributes: Vec::new(),
        })
    }

    pub fn attrib_location<G: GlApi + ?Sized>(&self, gl: &G, name: &str) -> Result<i32> {
        let name = CString::new(name).wrap_err("Attribute name contains a NUL byte")?;
        Ok(gl.attrib_location(self.id, &name))
    }

    pub fn uniform_location<G: GlApi + ?Sized>(&self, gl: &G, name: &str) -> Result<i32> {
        let name = CString::new(name).wrap_err("Uniform name contains a NUL byte")?;
        Ok(gl.uniform_location(self.id, &name))
    }

    /// Registers an attribute location to be enabled on `bind`.
    /// Inactive (negative) locations are ignored.
    pub fn add_attribute(&mut self, location: i32) {
        if let Ok(location) = u32::try_from(location) {
            if !self.attributes.contains(&location) {
                self.attributes.push(location);
            }
        }
    }

    pub fn attributes(&self) -> &[u32] {
        &self.attributes
    }

    pub fn bind<G: GlApi + ?Sized>(&self, gl: &G) {
        gl.use_program(self.id);
        for &attr in &self.attributes {
            gl.enable_attrib(attr);
        }
    }

    pub fn unbind<G: GlApi + ?Sized>(&self, gl: &G) {
        for &attr in &self.attributes {
            gl.disable_attrib(attr);
        }
        gl.use_program(0);
    }

    pub fn delete<G: GlApi + ?Sized>(self, gl: &G) {
        gl.delete_program(self.id);
    }

    fn compile_shader<G: GlApi + ?Sized>(gl: &G, src: &str, stage: Stage) -> Result<u32> {
        let src = CString::new(src)
            .wrap_err_with(|| format!("The {} shader source contains a NUL byte", stage.name()))?;

        let shader = gl.create_shader(stage);
        gl.shader_source(shader, &src);
        gl.compile_shader(shader);

        if !gl.compile_status(shader) {
            let info_msg = gl.shader_info_log(shader);
            gl.delete_shader(shader);
            return Err(eyre!(
                "Failed to compile a {} shader: '{}'",
                stage.name(),
                info_msg.trim_end()
            ));
        }

        Ok(shader)
    }

    fn link_shaders<G: GlApi + ?Sized>(gl: &G, vs: u32, fs: u32) -> Result<u32> {
        let program = gl.create_program();
        gl.attach_shader(program, vs);
        gl.attach_shader(program, fs);
        gl.link_program(program);

        let linked = gl.link_status(program);
        let info_msg = if linked {
            String::new()
        } else {
            gl.program_info_log(program)
        };

        gl.detach_shader(program, vs);
        gl.detach_shader(program, fs);
        gl.delete_shader(vs);
        gl.delete_shader(fs);

        if !linked {
            gl.delete_program(program);
            return Err(eyre!(
                "Failed to link a shader program: '{}'",
                info_msg.trim_end()
            ));
        }

        Ok(program)
    }
}
