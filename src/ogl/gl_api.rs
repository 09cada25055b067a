use std::{ffi::CString, ptr};

use gl::types::GLenum;

/// Shader stage, maps onto `GL_VERTEX_SHADER` / `GL_FRAGMENT_SHADER`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Vertex,
    Fragment,
}

impl Stage {
    pub fn gl_enum(self) -> GLenum {
        match self {
            Stage::Vertex => gl::VERTEX_SHADER,
            Stage::Fragment => gl::FRAGMENT_SHADER,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Stage::Vertex => "vertex",
            Stage::Fragment => "fragment",
        }
    }
}

/// The driver calls needed to build a program and feed it uniforms.
///
/// Names mirror the GL functions. Ids and locations are the raw GL integers,
/// a location of `-1` means "not active in the program".
pub trait GlApi {
    fn create_shader(&self, stage: Stage) -> u32;
    fn shader_source(&self, shader: u32, src: &CString);
    fn compile_shader(&self, shader: u32);
    fn compile_status(&self, shader: u32) -> bool;
    fn shader_info_log(&self, shader: u32) -> String;
    fn delete_shader(&self, shader: u32);

    fn create_program(&self) -> u32;
    fn attach_shader(&self, program: u32, shader: u32);
    fn detach_shader(&self, program: u32, shader: u32);
    fn link_program(&self, program: u32);
    fn link_status(&self, program: u32) -> bool;
    fn program_info_log(&self, program: u32) -> String;
    fn use_program(&self, program: u32);
    fn delete_program(&self, program: u32);

    fn attrib_location(&self, program: u32, name: &CString) -> i32;
    fn uniform_location(&self, program: u32, name: &CString) -> i32;
    fn enable_attrib(&self, location: u32);
    fn disable_attrib(&self, location: u32);

    fn uniform_4f(&self, location: i32, v: [f32; 4]);
    fn uniform_mat4(&self, location: i32, cols: &[f32; 16]);
}

const INFO_LOG_LEN: usize = 512;

/// Calls straight into the loaded `gl` function pointers.
/// A context has to be current on the calling thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeGl;

impl GlApi for NativeGl {
    fn create_shader(&self, stage: Stage) -> u32 {
        unsafe { gl::CreateShader(stage.gl_enum()) }
    }

    fn shader_source(&self, shader: u32, src: &CString) {
        unsafe { gl::ShaderSource(shader, 1, &src.as_ptr(), ptr::null()) }
    }

    fn compile_shader(&self, shader: u32) {
        unsafe { gl::CompileShader(shader) }
    }

    fn compile_status(&self, shader: u32) -> bool {
        let mut res = 0;
        unsafe { gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut res) };
        res != 0
    }

    fn shader_info_log(&self, shader: u32) -> String {
        let mut info_log = [0u8; INFO_LOG_LEN];
        let mut info_len = 0;
        unsafe {
            gl::GetShaderInfoLog(
                shader,
                INFO_LOG_LEN as i32,
                &mut info_len,
                info_log.as_mut_ptr() as _,
            );
        }
        let len = (info_len.max(0) as usize).min(INFO_LOG_LEN);
        String::from_utf8_lossy(&info_log[..len]).into_owned()
    }

    fn delete_shader(&self, shader: u32) {
        unsafe { gl::DeleteShader(shader) }
    }

    fn create_program(&self) -> u32 {
        unsafe { gl::CreateProgram() }
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        unsafe { gl::AttachShader(program, shader) }
    }

    fn detach_shader(&self, program: u32, shader: u32) {
        unsafe { gl::DetachShader(program, shader) }
    }

    fn link_program(&self, program: u32) {
        unsafe { gl::LinkProgram(program) }
    }

    fn link_status(&self, program: u32) -> bool {
        let mut res = 0;
        unsafe { gl::GetProgramiv(program, gl::LINK_STATUS, &mut res) };
        res != 0
    }

    fn program_info_log(&self, program: u32) -> String {
        let mut info_log = [0u8; INFO_LOG_LEN];
        let mut info_len = 0;
        unsafe {
            gl::GetProgramInfoLog(
                program,
                INFO_LOG_LEN as i32,
                &mut info_len,
                info_log.as_mut_ptr() as _,
            );
        }
        let len = (info_len.max(0) as usize).min(INFO_LOG_LEN);
        String::from_utf8_lossy(&info_log[..len]).into_owned()
    }

    fn use_program(&self, program: u32) {
        unsafe { gl::UseProgram(program) }
    }

    fn delete_program(&self, program: u32) {
        unsafe { gl::DeleteProgram(program) }
    }

    fn attrib_location(&self, program: u32, name: &CString) -> i32 {
        unsafe { gl::GetAttribLocation(program, name.as_ptr()) }
    }

    fn uniform_location(&self, program: u32, name: &CString) -> i32 {
        unsafe { gl::GetUniformLocation(program, name.as_ptr()) }
    }

    fn enable_attrib(&self, location: u32) {
        unsafe { gl::EnableVertexAttribArray(location) }
    }

    fn disable_attrib(&self, location: u32) {
        unsafe { gl::DisableVertexAttribArray(location) }
    }

    fn uniform_4f(&self, location: i32, v: [f32; 4]) {
        unsafe { gl::Uniform4f(location, v[0], v[1], v[2], v[3]) }
    }

    fn uniform_mat4(&self, location: i32, cols: &[f32; 16]) {
        unsafe { gl::UniformMatrix4fv(location, 1, gl::FALSE, cols.as_ptr()) }
    }
}

#[cfg(test)]
pub mod mock {
    //! Recording driver for tests, no GPU needed.

    use std::{cell::RefCell, collections::HashMap, ffi::CString};

    use super::{GlApi, Stage};

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        CreateShader(Stage, u32),
        CompileShader(u32),
        DeleteShader(u32),
        CreateProgram(u32),
        AttachShader(u32, u32),
        DetachShader(u32, u32),
        LinkProgram(u32),
        UseProgram(u32),
        DeleteProgram(u32),
        EnableAttrib(u32),
        DisableAttrib(u32),
        Uniform4f(i32, [f32; 4]),
        UniformMat4(i32, [f32; 16]),
    }

    #[derive(Default)]
    pub struct MockGl {
        pub calls: RefCell<Vec<Call>>,
        pub sources: RefCell<HashMap<u32, String>>,
        pub stages: RefCell<HashMap<u32, Stage>>,
        pub next_id: RefCell<u32>,
        pub fail_stage: Option<Stage>,
        pub fail_link: bool,
        pub attribs: HashMap<String, i32>,
        pub uniforms: HashMap<String, i32>,
    }

    impl MockGl {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_locations(attribs: &[(&str, i32)], uniforms: &[(&str, i32)]) -> Self {
            Self {
                attribs: attribs.iter().map(|(n, l)| (n.to_string(), *l)).collect(),
                uniforms: uniforms.iter().map(|(n, l)| (n.to_string(), *l)).collect(),
                ..Self::default()
            }
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
            self.calls.borrow().iter().filter(|c| pred(c)).count()
        }

        fn next(&self) -> u32 {
            let mut id = self.next_id.borrow_mut();
            *id += 1;
            *id
        }

        fn push(&self, call: Call) {
            self.calls.borrow_mut().push(call);
        }
    }

    impl GlApi for MockGl {
        fn create_shader(&self, stage: Stage) -> u32 {
            let id = self.next();
            self.stages.borrow_mut().insert(id, stage);
            self.push(Call::CreateShader(stage, id));
            id
        }

        fn shader_source(&self, shader: u32, src: &CString) {
            self.sources
                .borrow_mut()
                .insert(shader, src.to_string_lossy().into_owned());
        }

        fn compile_shader(&self, shader: u32) {
            self.push(Call::CompileShader(shader));
        }

        fn compile_status(&self, shader: u32) -> bool {
            self.stages.borrow().get(&shader).copied() != self.fail_stage
        }

        fn shader_info_log(&self, shader: u32) -> String {
            format!("0:1: syntax error in shader {shader}")
        }

        fn delete_shader(&self, shader: u32) {
            self.push(Call::DeleteShader(shader));
        }

        fn create_program(&self) -> u32 {
            let id = self.next();
            self.push(Call::CreateProgram(id));
            id
        }

        fn attach_shader(&self, program: u32, shader: u32) {
            self.push(Call::AttachShader(program, shader));
        }

        fn detach_shader(&self, program: u32, shader: u32) {
            self.push(Call::DetachShader(program, shader));
        }

        fn link_program(&self, program: u32) {
            self.push(Call::LinkProgram(program));
        }

        fn link_status(&self, _program: u32) -> bool {
            !self.fail_link
        }

        fn program_info_log(&self, _program: u32) -> String {
            "error: u_color undeclared".to_string()
        }

        fn use_program(&self, program: u32) {
            self.push(Call::UseProgram(program));
        }

        fn delete_program(&self, program: u32) {
            self.push(Call::DeleteProgram(program));
        }

        fn attrib_location(&self, _program: u32, name: &CString) -> i32 {
            let name = name.to_string_lossy();
            self.attribs.get(name.as_ref()).copied().unwrap_or(-1)
        }

        fn uniform_location(&self, _program: u32, name: &CString) -> i32 {
            let name = name.to_string_lossy();
            self.uniforms.get(name.as_ref()).copied().unwrap_or(-1)
        }

        fn enable_attrib(&self, location: u32) {
            self.push(Call::EnableAttrib(location));
        }

        fn disable_attrib(&self, location: u32) {
            self.push(Call::DisableAttrib(location));
        }

        fn uniform_4f(&self, location: i32, v: [f32; 4]) {
            self.push(Call::Uniform4f(location, v));
        }

        fn uniform_mat4(&self, location: i32, cols: &[f32; 16]) {
            self.push(Call::UniformMat4(location, *cols));
        }
    }
}
