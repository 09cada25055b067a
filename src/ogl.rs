use std::{
    ffi::{c_void, CStr},
    ptr,
};

/// Thin seam over the OpenGL entry points used by the shader code.
pub mod gl_api;

/// Abstraction for working with OpenGL Shaders.
pub mod shader;

pub use gl_api::{GlApi, NativeGl};
pub use shader::Shader;

pub fn init_debug() {
    unsafe {
        gl::Enable(gl::DEBUG_OUTPUT);
        gl::Enable(gl::DEBUG_OUTPUT_SYNCHRONOUS);
        gl::DebugMessageCallback(Some(gl_debug_callback), ptr::null());
        gl::DebugMessageControl(
            gl::DONT_CARE,
            gl::DONT_CARE,
            gl::DONT_CARE,
            0,
            ptr::null(),
            gl::TRUE,
        );
    };
}

extern "system" fn gl_debug_callback(
    _src: u32,
    _typ: u32,
    id: u32,
    severity: u32,
    _len: i32,
    msg: *const i8,
    _user_param: *mut c_void,
) {
    // Buffer creation on NVidia cards
    if id == 131185 {
        return;
    }

    let msg = unsafe { CStr::from_ptr(msg) };
    let msg = msg.to_string_lossy();

    match severity {
        gl::DEBUG_SEVERITY_NOTIFICATION => log::debug!("OpenGL notification ({id}): '{msg}'"),
        gl::DEBUG_SEVERITY_LOW => log::info!("OpenGL low ({id}): '{msg}'"),
        gl::DEBUG_SEVERITY_MEDIUM => log::warn!("OpenGL medium ({id}): '{msg}'"),
        gl::DEBUG_SEVERITY_HIGH => log::error!("OpenGL high ({id}): '{msg}'"),
        _ => log::warn!("OpenGL unknown severity {severity} ({id}): '{msg}'"),
    }
}
