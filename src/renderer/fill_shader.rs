use std::cell::Cell;

use eyre::{Result, WrapErr};
use glam::{Mat4, Vec4};

use crate::{
    ogl::{GlApi, Shader},
    shaders::ShaderKind,
};

/// The program used for solid-colored polygons.
///
/// Reads 2D positions from `a_pos`, transforms them by `u_matrix`
/// and paints every fragment with `u_color`.
#[derive(Debug)]
pub struct FillShader {
    pub shader: Shader,

    pub a_pos: i32,
    pub u_matrix: i32,
    pub u_color: i32,

    bound: Cell<bool>,
    matrix: Cell<Option<Mat4>>,
    color: Cell<Option<Vec4>>,
}

impl FillShader {
    pub fn new<G: GlApi + ?Sized>(gl: &G) -> Result<Self> {
        let src = ShaderKind::Fill.source();

        let mut shader = match Shader::new(gl, src.vertex, src.fragment) {
            Ok(shader) => shader,
            Err(e) => {
                log::error!("invalid {} shader", src.name);
                return Err(e).wrap_err("invalid fill shader");
            }
        };

        let a_pos = shader.attrib_location(gl, "a_pos")?;
        shader.add_attribute(a_pos);

        let u_matrix = shader.uniform_location(gl, "u_matrix")?;
        let u_color = shader.uniform_location(gl, "u_color")?;

        for (name, loc) in [("a_pos", a_pos), ("u_matrix", u_matrix), ("u_color", u_color)] {
            if loc < 0 {
                log::warn!("'{name}' is not active in the {} shader", src.name);
            }
        }
        log::debug!(
            "Created the {} shader {} with attributes {:?}",
            src.name,
            shader.id,
            shader.attributes()
        );

        Ok(Self {
            shader,
            a_pos,
            u_matrix,
            u_color,
            bound: Cell::new(false),
            matrix: Cell::new(None),
            color: Cell::new(None),
        })
    }

    /// Uploads `u_matrix` unless it already holds `mat`.
    /// The program has to be bound, otherwise nothing is uploaded or cached.
    pub fn set_matrix<G: GlApi + ?Sized>(&self, gl: &G, mat: &Mat4) {
        if !self.check_bound("u_matrix") || self.matrix.get().as_ref() == Some(mat) {
            return;
        }
        gl.uniform_mat4(self.u_matrix, &mat.to_cols_array());
        self.matrix.set(Some(*mat));
    }

    /// Uploads `u_color` unless it already holds `color`.
    /// Same binding requirement as `set_matrix`.
    pub fn set_color<G: GlApi + ?Sized>(&self, gl: &G, color: Vec4) {
        if !self.check_bound("u_color") || self.color.get() == Some(color) {
            return;
        }
        gl.uniform_4f(self.u_color, color.to_array());
        self.color.set(Some(color));
    }

    pub fn bind<G: GlApi + ?Sized>(&self, gl: &G) {
        self.shader.bind(gl);
        self.bound.set(true);
    }

    pub fn unbind<G: GlApi + ?Sized>(&self, gl: &G) {
        self.shader.unbind(gl);
        self.bound.set(false);
    }

    fn check_bound(&self, uniform: &str) -> bool {
        let bound = self.bound.get();
        if !bound {
            log::warn!("Setting '{uniform}' while the fill shader is not bound");
        }
        bound
    }

    pub fn delete<G: GlApi + ?Sized>(self, gl: &G) {
        self.shader.delete(gl);
    }
}
