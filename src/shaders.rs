//! GLSL sources compiled into the binary.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderKind {
    Fill,
}

pub struct ShaderSource {
    pub name: &'static str,
    pub vertex: &'static str,
    pub fragment: &'static str,
}

const FILL: ShaderSource = ShaderSource {
    name: "fill",
    vertex: include_str!("../shaders/fill.vert"),
    fragment: include_str!("../shaders/fill.frag"),
};

impl ShaderKind {
    #[allow(unused)]
    pub const ALL: [ShaderKind; 1] = [ShaderKind::Fill];

    pub fn source(self) -> &'static ShaderSource {
        match self {
            ShaderKind::Fill => &FILL,
        }
    }
}
