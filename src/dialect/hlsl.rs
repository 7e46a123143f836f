//! HLSL rules for Direct3D 11.
//!
//! Stage interfaces are parameters of `main` with semantics instead of
//! global declarations. Locations become semantic indices, so the same
//! positional ordering rules apply as for GLSL.

use super::DialectBackend;
use crate::profile::CapabilityProfile;
use crate::stage::{FragmentStage, TextureSlot, UniformStorage, VertexStage};

/// Emission rules for HLSL.
#[derive(Debug)]
pub struct HlslBackend;

/// Formats a `main` signature from its parameter list.
fn write_signature(out: &mut String, params: &[String]) {
    if params.is_empty() {
        out.push_str("void main()\n");
        return;
    }

    out.push_str("void main(\n");
    out.push_str(&params.join(",\n"));
    out.push_str(")\n");
}

impl DialectBackend for HlslBackend {
    fn write_preamble(&self, _out: &mut String, _profile: &CapabilityProfile) {}

    fn write_uniform_block(
        &self,
        out: &mut String,
        _profile: &CapabilityProfile,
        _storage: UniformStorage,
    ) {
        out.push_str("cbuffer UBOBlock : register(b0)\n");
    }

    fn write_texture(&self, out: &mut String, _profile: &CapabilityProfile, slot: &TextureSlot<'_>) {
        let TextureSlot { name, index, .. } = *slot;
        out.push_str(&format!("Texture2D {name} : register(t{index});\n"));
        out.push_str(&format!("SamplerState {name}_ss : register(s{index});\n"));
    }

    fn write_texture_buffer(
        &self,
        out: &mut String,
        _profile: &CapabilityProfile,
        slot: &TextureSlot<'_>,
    ) {
        let element = match (slot.is_integer, slot.is_unsigned) {
            (false, _) => "float4",
            (true, false) => "int4",
            (true, true) => "uint4",
        };
        out.push_str(&format!(
            "Buffer<{element}> {} : register(t{});\n",
            slot.name, slot.index
        ));
    }

    fn write_vertex_entry(&self, out: &mut String, _profile: &CapabilityProfile, stage: &VertexStage<'_>) {
        let mut params = Vec::new();

        if stage.declare_vertex_id {
            params.push("  in uint v_id : SV_VertexID".to_string());
        }
        for (i, attribute) in stage.attributes.iter().enumerate() {
            params.push(format!("  in {attribute} : ATTR{i}"));
        }
        for i in 0..stage.num_color_outputs {
            params.push(format!("  out float4 v_col{i} : COLOR{i}"));
        }
        for i in 0..stage.num_texcoord_outputs {
            params.push(format!("  out float2 v_tex{i} : TEXCOORD{i}"));
        }
        for (varying, semantic) in stage
            .additional_outputs
            .iter()
            .zip(stage.num_texcoord_outputs..)
        {
            params.push(format!(
                "  {} out {} : TEXCOORD{semantic}",
                varying.qualifier, varying.type_and_name
            ));
        }
        params.push("  out float4 v_pos : SV_Position".to_string());

        write_signature(out, &params);
    }

    fn write_fragment_entry(
        &self,
        out: &mut String,
        _profile: &CapabilityProfile,
        stage: &FragmentStage<'_>,
    ) {
        let mut params = Vec::new();

        for i in 0..stage.num_color_inputs {
            params.push(format!("  in float4 v_col{i} : COLOR{i}"));
        }
        for i in 0..stage.num_texcoord_inputs {
            params.push(format!("  in float2 v_tex{i} : TEXCOORD{i}"));
        }
        for (varying, semantic) in stage
            .additional_inputs
            .iter()
            .zip(stage.num_texcoord_inputs..)
        {
            params.push(format!(
                "  {} in {} : TEXCOORD{semantic}",
                varying.qualifier, varying.type_and_name
            ));
        }
        if stage.declare_frag_coord {
            params.push("  in float4 v_pos : SV_Position".to_string());
        }
        if stage.depth_output {
            params.push("  out float o_depth : SV_Depth".to_string());
        }
        for i in 0..stage.num_color_outputs {
            params.push(format!("  out float4 o_col{i} : SV_Target{i}"));
        }

        write_signature(out, &params);
    }
}
