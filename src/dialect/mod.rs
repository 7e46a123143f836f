//! Dialect Layer
//!
//! Each target shading language is one [`Dialect`] variant. Everything a
//! dialect does differently lives behind [`DialectBackend`], so the rules of
//! one language can be read in a single file:
//!
//! | Dialect      | Backend                 | Macro table     |
//! |--------------|-------------------------|-----------------|
//! | `Glsl`       | [`GlslBackend`] desktop | `GLSL_MACROS`   |
//! | `GlslEs`     | [`GlslBackend`] ES      | `GLSL_MACROS`   |
//! | `VulkanGlsl` | [`GlslBackend`] Vulkan  | `GLSL_MACROS`   |
//! | `Hlsl`       | [`HlslBackend`]         | `HLSL_MACROS`   |

mod glsl;
mod hlsl;
pub mod macros;

pub use glsl::{GlslBackend, GlslFlavor};
pub use hlsl::HlslBackend;
pub use macros::{API_MACROS, GLSL_MACROS, HLSL_MACROS, MacroTable};

use crate::profile::{CapabilityProfile, RenderApi};
use crate::stage::{FragmentStage, TextureSlot, UniformStorage, VertexStage};

/// A target shading language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Desktop GLSL.
    Glsl,
    /// GLSL ES.
    GlslEs,
    /// GLSL consumed by a SPIR-V compiler for Vulkan.
    VulkanGlsl,
    /// HLSL for Direct3D 11.
    Hlsl,
}

static DESKTOP_GLSL: GlslBackend = GlslBackend::new(GlslFlavor::Desktop);
static ES_GLSL: GlslBackend = GlslBackend::new(GlslFlavor::Es);
static VULKAN_GLSL: GlslBackend = GlslBackend::new(GlslFlavor::Vulkan);
static HLSL: HlslBackend = HlslBackend;

impl Dialect {
    #[must_use]
    pub fn from_api(render_api: RenderApi) -> Self {
        match render_api {
            RenderApi::OpenGL => Self::Glsl,
            RenderApi::OpenGLES => Self::GlslEs,
            RenderApi::Vulkan => Self::VulkanGlsl,
            RenderApi::D3D11 => Self::Hlsl,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_glsl(self) -> bool {
        !matches!(self, Self::Hlsl)
    }

    /// The emission rules for this dialect.
    #[must_use]
    pub fn backend(self) -> &'static dyn DialectBackend {
        match self {
            Self::Glsl => &DESKTOP_GLSL,
            Self::GlslEs => &ES_GLSL,
            Self::VulkanGlsl => &VULKAN_GLSL,
            Self::Hlsl => &HLSL,
        }
    }

    /// The alias table emitted into every header of this dialect.
    #[must_use]
    pub fn macro_table(self) -> &'static MacroTable {
        if self.is_glsl() {
            &GLSL_MACROS
        } else {
            &HLSL_MACROS
        }
    }
}

/// Per-dialect emission rules.
///
/// Implementations append to `out` and read capabilities from `profile`;
/// they hold no state of their own.
pub trait DialectBackend: Sync {
    /// `#version` directive and `#extension` lines.
    fn write_preamble(&self, out: &mut String, profile: &CapabilityProfile);

    /// Default precision statements.
    fn write_precision(&self, _out: &mut String, _profile: &CapabilityProfile) {}

    /// The uniform block opening line, without the member list.
    fn write_uniform_block(
        &self,
        out: &mut String,
        profile: &CapabilityProfile,
        storage: UniformStorage,
    );

    /// A 2D texture and whatever sampler state it needs.
    fn write_texture(&self, out: &mut String, profile: &CapabilityProfile, slot: &TextureSlot<'_>);

    /// A texel buffer, typed by the slot's integer flags.
    fn write_texture_buffer(
        &self,
        out: &mut String,
        profile: &CapabilityProfile,
        slot: &TextureSlot<'_>,
    );

    /// Vertex stage inputs, outputs, aliases and the `main` signature.
    fn write_vertex_entry(&self, out: &mut String, profile: &CapabilityProfile, stage: &VertexStage<'_>);

    /// Fragment stage inputs, outputs, aliases and the `main` signature.
    ///
    /// Callers validate the color output count before dispatching here.
    fn write_fragment_entry(
        &self,
        out: &mut String,
        profile: &CapabilityProfile,
        stage: &FragmentStage<'_>,
    );
}

/// Writes the complete header for `profile`: preamble, API macros,
/// precision statements and the dialect's alias table.
pub fn write_header(out: &mut String, profile: &CapabilityProfile) {
    let dialect = profile.dialect();
    let backend = dialect.backend();

    backend.write_preamble(out, profile);

    for (name, api) in API_MACROS {
        out.push_str(&format!(
            "#define {name} {}\n",
            u32::from(profile.render_api() == api)
        ));
    }

    backend.write_precision(out, profile);
    dialect.macro_table().write(out);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_from_api() {
        assert_eq!(Dialect::from_api(RenderApi::OpenGL), Dialect::Glsl);
        assert_eq!(Dialect::from_api(RenderApi::OpenGLES), Dialect::GlslEs);
        assert_eq!(Dialect::from_api(RenderApi::Vulkan), Dialect::VulkanGlsl);
        assert_eq!(Dialect::from_api(RenderApi::D3D11), Dialect::Hlsl);
    }

    #[test]
    fn test_macro_table_by_family() {
        assert!(std::ptr::eq(Dialect::GlslEs.macro_table(), &GLSL_MACROS));
        assert!(std::ptr::eq(Dialect::VulkanGlsl.macro_table(), &GLSL_MACROS));
        assert!(std::ptr::eq(Dialect::Hlsl.macro_table(), &HLSL_MACROS));
    }

    #[test]
    fn test_header_api_macros() {
        let mut out = String::new();
        write_header(&mut out, &CapabilityProfile::for_api(RenderApi::Vulkan));
        assert!(out.contains("#define API_VULKAN 1\n"));
        assert!(out.contains("#define API_OPENGL 0\n"));
        assert!(out.contains("#define API_OPENGL_ES 0\n"));
        assert!(out.contains("#define API_D3D11 0\n"));
    }
}
