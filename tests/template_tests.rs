//! Template Library Tests
//!
//! Tests for:
//! - End-to-end template output per dialect
//! - Determinism of repeated generation
//! - Concurrent generation against one shared generator and cache

use std::sync::Arc;

use shadergen::{
    CapabilityProfile, GlFeatures, HostCapabilities, RenderApi, ShaderGenerator,
    ShaderSourceCache, ShaderTemplate, source_hash,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn generator(api: RenderApi) -> ShaderGenerator {
    init_logger();
    ShaderGenerator::new(CapabilityProfile::for_api(api))
}

fn all_generators() -> Vec<ShaderGenerator> {
    vec![
        ShaderGenerator::from_host(&HostCapabilities {
            render_api: RenderApi::OpenGL,
            shading_language_version: Some("4.60".into()),
            features: GlFeatures::GL_3_2 | GlFeatures::GL_4_2 | GlFeatures::GL_4_3,
            dual_source_blend: true,
        }),
        ShaderGenerator::from_host(&HostCapabilities {
            render_api: RenderApi::OpenGL,
            shading_language_version: Some("1.40".into()),
            ..Default::default()
        }),
        ShaderGenerator::from_host(&HostCapabilities {
            render_api: RenderApi::OpenGLES,
            shading_language_version: Some("OpenGL ES GLSL ES 3.20".into()),
            features: GlFeatures::GLES_3_1 | GlFeatures::GLES_3_2,
            ..Default::default()
        }),
        generator(RenderApi::Vulkan),
        generator(RenderApi::D3D11),
    ]
}

// ============================================================================
// End-to-End Scenarios
// ============================================================================

#[test]
fn gl_330_screen_quad_without_binding_layout() {
    init_logger();
    let generator = ShaderGenerator::from_host(&HostCapabilities {
        render_api: RenderApi::OpenGL,
        shading_language_version: Some("3.30".into()),
        features: GlFeatures::GL_3_2,
        ..Default::default()
    });
    let source = generator.generate_screen_quad_vertex_shader();

    assert!(source.starts_with("#version 330"));
    assert!(source.contains("#define API_OPENGL 1\n"));
    assert!(!source.contains("layout(location"));
    assert!(source.contains("#define v_id uint(gl_VertexID)\n"));
    assert!(source.contains("v_tex0 = float2(float((v_id << 1) & 2u), float(v_id & 2u));"));
}

#[test]
fn hlsl_fill_fragment_shader() {
    let source = generator(RenderApi::D3D11)
        .generate_fill_fragment_shader()
        .unwrap();

    assert!(source.contains("#define HLSL 1\n"));
    assert!(!source.contains("#define GLSL 1"));
    assert!(source.contains("cbuffer UBOBlock : register(b0)\n{\nfloat4 u_fill_color;\n};\n"));
    assert!(source.contains("out float o_depth : SV_Depth"));
    assert!(source.contains(
        "void main(\n  in float2 v_tex0 : TEXCOORD0,\n  out float o_depth : SV_Depth,\n  \
         out float4 o_col0 : SV_Target0)\n"
    ));
    assert!(source.contains("o_depth = u_fill_color.a;"));
}

#[test]
fn vulkan_copy_fragment_shader() {
    let source = generator(RenderApi::Vulkan)
        .generate_copy_fragment_shader()
        .unwrap();

    assert!(source.starts_with("#version 450 core"));
    assert!(source.contains("layout(std140, set = 0, binding = 0) uniform UBOBlock\n"));
    assert!(!source.contains("push_constant"));
    assert!(source.contains("layout(set = 0, binding = 1) uniform sampler2D samp0;\n"));
    assert!(source.contains("layout(location = 0) in VertexData {\n  float2 v_tex0;\n};\n"));
    assert!(source.contains("o_col0 = SAMPLE_TEXTURE(samp0, coords);"));
}

#[test]
fn hlsl_screen_quad_signature() {
    let source = generator(RenderApi::D3D11).generate_screen_quad_vertex_shader();
    assert!(source.contains(
        "void main(\n  in uint v_id : SV_VertexID,\n  out float2 v_tex0 : TEXCOORD0,\n  \
         out float4 v_pos : SV_Position)\n"
    ));
}

#[test]
fn screen_quad_flips_y_outside_d3d() {
    for generator in all_generators() {
        let source = generator.generate_screen_quad_vertex_shader();
        assert!(source.contains("#if API_OPENGL || API_OPENGL_ES || API_VULKAN\n    v_pos.y = -v_pos.y;"));
    }
}

#[test]
fn every_template_generates_for_every_dialect() {
    for generator in all_generators() {
        for template in ShaderTemplate::ALL {
            let source = generator.generate(template).unwrap();
            assert!(source.trim_end().ends_with('}'), "{template:?}");
            assert!(source.contains("void main("), "{template:?}");
        }
    }
}

#[test]
fn gles_copy_shader_has_precision_and_binding() {
    let generator = &all_generators()[2];
    let source = generator.generate_copy_fragment_shader().unwrap();
    assert!(source.starts_with("#version 320 es\n\n"));
    assert!(source.contains("precision highp sampler2D;\n"));
    assert!(source.contains("layout(binding = 0) uniform sampler2D samp0;\n"));
    assert!(source.contains("layout(std140, binding = 1) uniform UBOBlock\n"));
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn repeated_generation_is_byte_identical() {
    for generator in all_generators() {
        for template in ShaderTemplate::ALL {
            let a = generator.generate(template).unwrap();
            let b = generator.generate(template).unwrap();
            assert_eq!(a, b);
            assert_eq!(source_hash(&a), source_hash(&b));
        }
    }
}

#[test]
fn independent_generators_for_same_host_agree() {
    let host = HostCapabilities {
        render_api: RenderApi::OpenGLES,
        shading_language_version: Some("OpenGL ES GLSL ES 3.10".into()),
        features: GlFeatures::GLES_3_1 | GlFeatures::EXT_BLEND_FUNC_EXTENDED,
        dual_source_blend: true,
    };
    let a = ShaderGenerator::from_host(&host);
    let b = ShaderGenerator::from_host(&host);
    for template in ShaderTemplate::ALL {
        assert_eq!(a.generate(template).unwrap(), b.generate(template).unwrap());
    }
}

#[test]
fn dialects_produce_distinct_sources() {
    let sources: Vec<_> = all_generators()
        .iter()
        .map(|g| g.generate(ShaderTemplate::CopyFragment).unwrap())
        .collect();
    for (i, a) in sources.iter().enumerate() {
        for b in &sources[i + 1..] {
            assert_ne!(source_hash(a), source_hash(b));
        }
    }
}

// ============================================================================
// Concurrency
// ============================================================================

#[test]
fn concurrent_generation_matches_serial() {
    let generator = Arc::new(generator(RenderApi::Vulkan));
    let expected: Vec<_> = ShaderTemplate::ALL
        .iter()
        .map(|&t| generator.generate(t).unwrap())
        .collect();

    std::thread::scope(|scope| {
        for _ in 0..8 {
            let generator = Arc::clone(&generator);
            let expected = &expected;
            scope.spawn(move || {
                for (template, expected) in ShaderTemplate::ALL.iter().zip(expected) {
                    assert_eq!(&generator.generate(*template).unwrap(), expected);
                }
            });
        }
    });
}

#[test]
fn shared_cache_serves_identical_sources() {
    let cache = ShaderSourceCache::new(generator(RenderApi::OpenGLES));

    let hashes: Vec<u128> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    cache
                        .get_or_generate(ShaderTemplate::ScreenQuadVertex)
                        .unwrap()
                        .hash
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(hashes.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(cache.len(), 1);
    assert_eq!(
        hashes[0],
        source_hash(&cache.generator().generate_screen_quad_vertex_shader())
    );
}
