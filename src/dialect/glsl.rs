//! GLSL family rules: desktop GL, GL ES and Vulkan.

use super::DialectBackend;
use crate::profile::{CapabilityProfile, GlFeatures, VULKAN_VERSION_DIRECTIVE};
use crate::stage::{FragmentStage, TextureSlot, UniformStorage, Varying, VertexStage};

/// Which GLSL variant a [`GlslBackend`] emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlslFlavor {
    Desktop,
    Es,
    Vulkan,
}

/// Emission rules shared by the GLSL dialects.
#[derive(Debug)]
pub struct GlslBackend {
    flavor: GlslFlavor,
}

impl GlslBackend {
    #[must_use]
    pub const fn new(flavor: GlslFlavor) -> Self {
        Self { flavor }
    }

    #[must_use]
    pub fn flavor(&self) -> GlslFlavor {
        self.flavor
    }

    /// `layout(...)` prefix for a texture-like binding, or nothing when the
    /// binding is assigned through API calls.
    fn binding_prefix(&self, profile: &CapabilityProfile, binding: u32) -> String {
        match self.flavor {
            GlslFlavor::Vulkan => format!("layout(set = 0, binding = {binding}) "),
            _ if profile.use_binding_layout() => format!("layout(binding = {binding}) "),
            _ => String::new(),
        }
    }

    fn block_prefix(&self) -> &'static str {
        if self.flavor == GlslFlavor::Vulkan {
            "layout(location = 0) "
        } else {
            ""
        }
    }
}

/// Stage-to-stage varyings, in the fixed order colors, texcoords, additional.
struct Varyings<'s, 'a> {
    colors: u32,
    texcoords: u32,
    additional: &'s [Varying<'a>],
    block_suffix: &'a str,
}

impl Varyings<'_, '_> {
    /// Declares the varyings as a `VertexData` interface block.
    fn write_block(&self, out: &mut String, direction: &str, prefix: &str) {
        out.push_str(&format!(
            "{prefix}{direction} VertexData{} {{\n",
            self.block_suffix
        ));
        for i in 0..self.colors {
            out.push_str(&format!("  float4 v_col{i};\n"));
        }
        for i in 0..self.texcoords {
            out.push_str(&format!("  float2 v_tex{i};\n"));
        }
        for varying in self.additional {
            out.push_str(&format!(
                "  {} {};\n",
                varying.qualifier, varying.type_and_name
            ));
        }
        out.push_str("};\n");
    }

    /// Declares the varyings as individual `in` / `out` variables.
    fn write_loose(&self, out: &mut String, direction: &str) {
        for i in 0..self.colors {
            out.push_str(&format!("{direction} float4 v_col{i};\n"));
        }
        for i in 0..self.texcoords {
            out.push_str(&format!("{direction} float2 v_tex{i};\n"));
        }
        for varying in self.additional {
            out.push_str(&format!(
                "{} {direction} {};\n",
                varying.qualifier, varying.type_and_name
            ));
        }
    }
}

impl DialectBackend for GlslBackend {
    fn write_preamble(&self, out: &mut String, profile: &CapabilityProfile) {
        match self.flavor {
            GlslFlavor::Vulkan => {
                out.push_str(VULKAN_VERSION_DIRECTIVE);
                out.push_str("\n\n");
            }
            GlslFlavor::Es => {
                out.push_str(&profile.version_string());
                out.push_str("\n\n");

                if profile.has_feature(GlFeatures::EXT_BLEND_FUNC_EXTENDED) {
                    out.push_str("#extension GL_EXT_blend_func_extended : require\n");
                }
            }
            GlslFlavor::Desktop => {
                out.push_str(&profile.version_string());
                out.push_str("\n\n");

                // Explicit layouts are core from 4.3.
                if profile.use_binding_layout() && !profile.has_feature(GlFeatures::GL_4_3) {
                    out.push_str("#extension GL_ARB_explicit_attrib_location : require\n");
                    out.push_str("#extension GL_ARB_explicit_uniform_location : require\n");
                    out.push_str("#extension GL_ARB_shading_language_420pack : require\n");
                }

                if !profile.has_feature(GlFeatures::GL_3_2) {
                    out.push_str("#extension GL_ARB_uniform_buffer_object : require\n");
                }

                if !profile.features().intersects(GlFeatures::GL_4_3 | GlFeatures::GLES_3_1)
                    && profile.has_feature(GlFeatures::ARB_SHADER_STORAGE_BUFFER_OBJECT)
                {
                    out.push_str("#extension GL_ARB_shader_storage_buffer_object : require\n");
                }
            }
        }
    }

    fn write_precision(&self, out: &mut String, profile: &CapabilityProfile) {
        if self.flavor != GlslFlavor::Es {
            return;
        }

        out.push_str("precision highp float;\n");
        out.push_str("precision highp int;\n");
        out.push_str("precision highp sampler2D;\n");

        if profile.has_feature(GlFeatures::GLES_3_2) {
            out.push_str("precision highp usamplerBuffer;\n");
        }

        out.push('\n');
    }

    fn write_uniform_block(
        &self,
        out: &mut String,
        profile: &CapabilityProfile,
        storage: UniformStorage,
    ) {
        let line = match (self.flavor, storage) {
            (GlslFlavor::Vulkan, UniformStorage::PushConstant) => {
                "layout(push_constant) uniform PushConstants\n"
            }
            // Binding 0 is reserved for the uniform block; textures start at 1.
            (GlslFlavor::Vulkan, UniformStorage::DescriptorSet) => {
                "layout(std140, set = 0, binding = 0) uniform UBOBlock\n"
            }
            _ if profile.use_binding_layout() => "layout(std140, binding = 1) uniform UBOBlock\n",
            _ => "layout(std140) uniform UBOBlock\n",
        };
        out.push_str(line);
    }

    fn write_texture(&self, out: &mut String, profile: &CapabilityProfile, slot: &TextureSlot<'_>) {
        let binding = if self.flavor == GlslFlavor::Vulkan {
            slot.index + 1
        } else {
            slot.index
        };
        out.push_str(&self.binding_prefix(profile, binding));
        out.push_str(&format!("uniform sampler2D {};\n", slot.name));
    }

    fn write_texture_buffer(
        &self,
        out: &mut String,
        profile: &CapabilityProfile,
        slot: &TextureSlot<'_>,
    ) {
        let prefix = match (slot.is_integer, slot.is_unsigned) {
            (false, _) => "",
            (true, false) => "i",
            (true, true) => "u",
        };
        out.push_str(&self.binding_prefix(profile, slot.index));
        out.push_str(&format!("uniform {prefix}samplerBuffer {};\n", slot.name));
    }

    fn write_vertex_entry(&self, out: &mut String, profile: &CapabilityProfile, stage: &VertexStage<'_>) {
        for (location, attribute) in stage.attributes.iter().enumerate() {
            if profile.use_binding_layout() {
                out.push_str(&format!("layout(location = {location}) in {attribute};\n"));
            } else {
                out.push_str(&format!("in {attribute};\n"));
            }
        }

        let varyings = Varyings {
            colors: stage.num_color_outputs,
            texcoords: stage.num_texcoord_outputs,
            additional: &stage.additional_outputs,
            block_suffix: stage.block_suffix,
        };
        if profile.use_interface_blocks() {
            varyings.write_block(out, "out", self.block_prefix());
        } else {
            varyings.write_loose(out, "out");
        }

        out.push_str("#define v_pos gl_Position\n");
        if stage.declare_vertex_id {
            let builtin = if self.flavor == GlslFlavor::Vulkan {
                "gl_VertexIndex"
            } else {
                "gl_VertexID"
            };
            out.push_str(&format!("#define v_id uint({builtin})\n"));
        }

        out.push_str("\nvoid main()\n");
    }

    fn write_fragment_entry(
        &self,
        out: &mut String,
        profile: &CapabilityProfile,
        stage: &FragmentStage<'_>,
    ) {
        let varyings = Varyings {
            colors: stage.num_color_inputs,
            texcoords: stage.num_texcoord_inputs,
            additional: &stage.additional_inputs,
            block_suffix: stage.block_suffix,
        };
        if profile.use_interface_blocks() {
            varyings.write_block(out, "in", self.block_prefix());
        } else {
            varyings.write_loose(out, "in");
        }

        if stage.declare_frag_coord {
            out.push_str("#define v_pos gl_FragCoord\n");
        }
        if stage.depth_output {
            out.push_str("#define o_depth gl_FragDepth\n");
        }

        for i in 0..stage.num_color_outputs {
            if !profile.use_binding_layout() {
                out.push_str(&format!("out float4 o_col{i};\n"));
            } else if profile.supports_dual_source_blend() {
                out.push_str(&format!("layout(location = 0, index = {i}) out float4 o_col{i};\n"));
            } else {
                out.push_str(&format!("layout(location = {i}) out float4 o_col{i};\n"));
            }
        }

        out.push_str("\nvoid main()\n");
    }
}
