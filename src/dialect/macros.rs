//! Cross-Dialect Macro Tables
//!
//! Static `#define` tables emitted after the version and extension block.
//! The GLSL table maps HLSL-style spellings onto GLSL; the HLSL table maps
//! GLSL spellings onto HLSL. A shader body written against either surface
//! then compiles in every dialect without its own preprocessor branches.

use crate::profile::RenderApi;

/// One family's alias set plus the helper functions it needs.
#[derive(Debug)]
pub struct MacroTable {
    /// `(name, value)` pairs, emitted as `#define name value` in order.
    pub defines: &'static [(&'static str, &'static str)],
    /// Function definitions emitted verbatim after the defines.
    pub helpers: &'static [&'static str],
}

impl MacroTable {
    /// Looks up the value of a define by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'static str> {
        self.defines
            .iter()
            .find_map(|&(key, value)| (key == name).then_some(value))
    }

    /// Appends the defines and helpers to `out`.
    pub fn write(&self, out: &mut String) {
        for (name, value) in self.defines {
            out.push_str(&format!("#define {name} {value}\n"));
        }
        for helper in self.helpers {
            out.push_str(helper);
            out.push('\n');
        }
    }
}

/// The boolean API selection macros, present in every header.
pub const API_MACROS: [(&str, RenderApi); 4] = [
    ("API_OPENGL", RenderApi::OpenGL),
    ("API_OPENGL_ES", RenderApi::OpenGLES),
    ("API_D3D11", RenderApi::D3D11),
    ("API_VULKAN", RenderApi::Vulkan),
];

pub static GLSL_MACROS: MacroTable = MacroTable {
    defines: &[
        ("GLSL", "1"),
        ("float2", "vec2"),
        ("float3", "vec3"),
        ("float4", "vec4"),
        ("int2", "ivec2"),
        ("int3", "ivec3"),
        ("int4", "ivec4"),
        ("uint2", "uvec2"),
        ("uint3", "uvec3"),
        ("uint4", "uvec4"),
        ("float2x2", "mat2"),
        ("float3x3", "mat3"),
        ("float4x4", "mat4"),
        ("mul(x, y)", "((x) * (y))"),
        ("nointerpolation", "flat"),
        ("frac", "fract"),
        ("lerp", "mix"),
        ("CONSTANT", "const"),
        ("VECTOR_EQ(a, b)", "((a) == (b))"),
        ("VECTOR_NEQ(a, b)", "((a) != (b))"),
        ("VECTOR_COMP_EQ(a, b)", "equal((a), (b))"),
        ("VECTOR_COMP_NEQ(a, b)", "notEqual((a), (b))"),
        ("SAMPLE_TEXTURE(name, coords)", "texture(name, coords)"),
        ("LOAD_TEXTURE(name, coords, mip)", "texelFetch(name, coords, mip)"),
        (
            "LOAD_TEXTURE_OFFSET(name, coords, mip, offset)",
            "texelFetchOffset(name, coords, mip, offset)",
        ),
        ("LOAD_TEXTURE_BUFFER(name, index)", "texelFetch(name, index)"),
        ("BEGIN_ARRAY(type, size)", "type[size]("),
        ("END_ARRAY", ")"),
    ],
    helpers: &[
        "float saturate(float value) { return clamp(value, 0.0, 1.0); }",
        "float2 saturate(float2 value) { return clamp(value, float2(0.0, 0.0), float2(1.0, 1.0)); }",
        "float3 saturate(float3 value) { return clamp(value, float3(0.0, 0.0, 0.0), float3(1.0, 1.0, 1.0)); }",
        "float4 saturate(float4 value) { return clamp(value, float4(0.0, 0.0, 0.0, 0.0), float4(1.0, 1.0, 1.0, 1.0)); }",
    ],
};

pub static HLSL_MACROS: MacroTable = MacroTable {
    defines: &[
        ("HLSL", "1"),
        ("roundEven", "round"),
        ("mix", "lerp"),
        ("fract", "frac"),
        ("vec2", "float2"),
        ("vec3", "float3"),
        ("vec4", "float4"),
        ("ivec2", "int2"),
        ("ivec3", "int3"),
        ("ivec4", "int4"),
        ("uvec2", "uint2"),
        ("uvec3", "uint3"),
        ("uvec4", "uint4"),
        ("mat2", "float2x2"),
        ("mat3", "float3x3"),
        ("mat4", "float4x4"),
        ("CONSTANT", "static const"),
        ("VECTOR_EQ(a, b)", "(all((a) == (b)))"),
        ("VECTOR_NEQ(a, b)", "(any((a) != (b)))"),
        ("VECTOR_COMP_EQ(a, b)", "((a) == (b))"),
        ("VECTOR_COMP_NEQ(a, b)", "((a) != (b))"),
        ("SAMPLE_TEXTURE(name, coords)", "name.Sample(name##_ss, coords)"),
        ("LOAD_TEXTURE(name, coords, mip)", "name.Load(int3(coords, mip))"),
        (
            "LOAD_TEXTURE_OFFSET(name, coords, mip, offset)",
            "name.Load(int3(coords, mip), offset)",
        ),
        ("LOAD_TEXTURE_BUFFER(name, index)", "name.Load(index)"),
        ("BEGIN_ARRAY(type, size)", "{"),
        ("END_ARRAY", "}"),
    ],
    helpers: &[],
};
