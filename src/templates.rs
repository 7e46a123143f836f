//! Template Library
//!
//! Complete utility shaders composed only from the builder primitives. They
//! double as golden fixtures: if the dialect layer cannot express them, it
//! is missing something.

use crate::builder::ShaderGenerator;
use crate::errors::Result;
use crate::stage::{FragmentStage, TextureSlot, UniformStorage, VertexStage};

/// The shaders provided by the template library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderTemplate {
    /// Fullscreen triangle derived from the vertex index, one texcoord output.
    ScreenQuadVertex,
    /// Writes `u_fill_color` to color and its alpha to depth.
    FillFragment,
    /// Samples `samp0` inside the `u_src_rect` source rectangle.
    CopyFragment,
}

impl ShaderTemplate {
    pub const ALL: [Self; 3] = [Self::ScreenQuadVertex, Self::FillFragment, Self::CopyFragment];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ScreenQuadVertex => "screen_quad_vs",
            Self::FillFragment => "fill_fs",
            Self::CopyFragment => "copy_fs",
        }
    }
}

// The vertex index bits pick the corners (0,0), (2,0), (0,2) of a triangle
// covering the viewport. D3D has Y down in clip space.
const SCREEN_QUAD_VERTEX_BODY: &str = r"
{
  v_tex0 = float2(float((v_id << 1) & 2u), float(v_id & 2u));
  v_pos = float4(v_tex0 * float2(2.0f, -2.0f) + float2(-1.0f, 1.0f), 0.0f, 1.0f);
  #if API_OPENGL || API_OPENGL_ES || API_VULKAN
    v_pos.y = -v_pos.y;
  #endif
}
";

const FILL_FRAGMENT_BODY: &str = r"
{
  o_col0 = u_fill_color;
  o_depth = u_fill_color.a;
}
";

const COPY_FRAGMENT_BODY: &str = r"
{
  float2 coords = u_src_rect.xy + v_tex0 * u_src_rect.zw;
  o_col0 = SAMPLE_TEXTURE(samp0, coords);
}
";

impl ShaderGenerator {
    /// Generates the source of `template`.
    pub fn generate(&self, template: ShaderTemplate) -> Result<String> {
        match template {
            ShaderTemplate::ScreenQuadVertex => Ok(self.generate_screen_quad_vertex_shader()),
            ShaderTemplate::FillFragment => self.generate_fill_fragment_shader(),
            ShaderTemplate::CopyFragment => self.generate_copy_fragment_shader(),
        }
    }

    /// Fullscreen-triangle vertex shader with a `v_tex0` output in `[0, 1]`.
    #[must_use]
    pub fn generate_screen_quad_vertex_shader(&self) -> String {
        self.builder()
            .header()
            .vertex_entry_point(
                &VertexStage::new()
                    .with_texcoord_outputs(1)
                    .with_vertex_id(),
            )
            .body(SCREEN_QUAD_VERTEX_BODY)
            .finish()
    }

    /// Solid fill fragment shader writing color and depth.
    pub fn generate_fill_fragment_shader(&self) -> Result<String> {
        Ok(self
            .builder()
            .header()
            .uniform_buffer(&["float4 u_fill_color"], UniformStorage::DescriptorSet)
            .fragment_entry_point(
                &FragmentStage::new()
                    .with_texcoord_inputs(1)
                    .with_depth_output(),
            )?
            .body(FILL_FRAGMENT_BODY)
            .finish())
    }

    /// Texture copy fragment shader sampling a source rectangle.
    pub fn generate_copy_fragment_shader(&self) -> Result<String> {
        Ok(self
            .builder()
            .header()
            .uniform_buffer(&["float4 u_src_rect"], UniformStorage::DescriptorSet)
            .texture(&TextureSlot::new("samp0", 0))
            .fragment_entry_point(&FragmentStage::new().with_texcoord_inputs(1))?
            .body(COPY_FRAGMENT_BODY)
            .finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{CapabilityProfile, RenderApi};

    #[test]
    fn test_template_names_are_unique() {
        let mut names: Vec<_> = ShaderTemplate::ALL.iter().map(|t| t.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ShaderTemplate::ALL.len());
    }

    #[test]
    fn test_generate_dispatches() {
        let generator = ShaderGenerator::new(CapabilityProfile::for_api(RenderApi::Vulkan));
        assert_eq!(
            generator.generate(ShaderTemplate::CopyFragment).unwrap(),
            generator.generate_copy_fragment_shader().unwrap()
        );
        assert_eq!(
            generator.generate(ShaderTemplate::ScreenQuadVertex).unwrap(),
            generator.generate_screen_quad_vertex_shader()
        );
    }
}
