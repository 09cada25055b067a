use eyre::Result;
use glam::{Mat4, Vec2, Vec4};

use crate::{ogl::NativeGl, settings::Settings};

pub use fill_buffer::FillBuffer;
pub use fill_shader::FillShader;

mod fill_buffer;
mod fill_shader;

/// Draws solid polygons in window pixel coordinates
pub struct Renderer {
    gl: NativeGl,
    fill_shader: FillShader,
    polygons: Vec<FillBuffer>,
    clear_color: Vec4,
    fill_color: Vec4,
}

impl Renderer {
    pub fn new(settings: &Settings) -> Result<Self> {
        let gl = NativeGl;
        let fill_shader = FillShader::new(&gl)?;

        Ok(Self {
            gl,
            fill_shader,
            polygons: Vec::new(),
            clear_color: settings.clear_color,
            fill_color: settings.fill_color,
        })
    }

    pub fn add_polygon(&mut self, points: &[Vec2]) -> Result<()> {
        let buffer = FillBuffer::new(points, self.fill_shader.a_pos)?;
        self.polygons.push(buffer);
        Ok(())
    }

    pub fn render(&self, width: u32, height: u32) {
        let c = self.clear_color;
        unsafe {
            gl::Viewport(0, 0, width as i32, height as i32);
            gl::ClearColor(c.x, c.y, c.z, c.w);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }

        if self.polygons.is_empty() {
            return;
        }

        // Attribute enables are VAO state, so the shader is bound per polygon
        let proj = projection(width, height);
        for polygon in &self.polygons {
            polygon.bind();
            self.fill_shader.bind(&self.gl);
            self.fill_shader.set_matrix(&self.gl, &proj);
            self.fill_shader.set_color(&self.gl, self.fill_color);
            polygon.draw();
        }

        self.fill_shader.unbind(&self.gl);
        FillBuffer::unbind();
    }

    pub fn delete(self) {
        for polygon in self.polygons {
            polygon.delete();
        }
        self.fill_shader.delete(&self.gl);
    }
}

/// Maps pixel coordinates (origin top-left) onto clip space
pub fn projection(width: u32, height: u32) -> Mat4 {
    Mat4::orthographic_rh_gl(0., width as f32, height as f32, 0., -1., 1.)
}
