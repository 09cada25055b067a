use std::{mem::size_of, ptr};

use eyre::{eyre, Result};
use glam::Vec2;

/// Polygon outline uploaded to the GPU, drawn as a triangle fan
pub struct FillBuffer {
    pub vao: u32,
    pub vbo: u32,
    pub vertex_count: i32,
}

impl FillBuffer {
    /// Uploads `points` and points attribute `a_pos` at them.
    /// Enabling the attribute is left to the shader's `bind`.
    pub fn new(points: &[Vec2], a_pos: i32) -> Result<Self> {
        if points.len() < 3 {
            return Err(eyre!(
                "A fill polygon needs at least 3 points, got '{}'",
                points.len()
            ));
        }
        let a_pos = u32::try_from(a_pos).map_err(|_| eyre!("'a_pos' is not active"))?;
        let vertex_count = i32::try_from(points.len())?;

        let flat: Vec<f32> = points.iter().flat_map(|p| p.to_array()).collect();

        let mut vao = 0;
        let mut vbo = 0;

        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::BindVertexArray(vao);

            gl::GenBuffers(1, &mut vbo);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                (flat.len() * size_of::<f32>()) as isize,
                flat.as_ptr() as _,
                gl::STATIC_DRAW,
            );

            gl::VertexAttribPointer(
                a_pos,
                2,
                gl::FLOAT,
                gl::FALSE,
                (2 * size_of::<f32>()) as i32,
                ptr::null(),
            );

            gl::BindVertexArray(0);
            gl::BindBuffer(gl::ARRAY_BUFFER, 0);
        }

        Ok(Self {
            vao,
            vbo,
            vertex_count,
        })
    }

    pub fn bind(&self) {
        unsafe { gl::BindVertexArray(self.vao) }
    }

    pub fn unbind() {
        unsafe { gl::BindVertexArray(0) }
    }

    /// The VAO has to be bound
    pub fn draw(&self) {
        unsafe { gl::DrawArrays(gl::TRIANGLE_FAN, 0, self.vertex_count) }
    }

    pub fn delete(self) {
        unsafe {
            gl::DeleteBuffers(1, &self.vbo);
            gl::DeleteVertexArrays(1, &self.vao);
        }
    }
}
