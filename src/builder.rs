//! Shader Source Builder
//!
//! [`ShaderGenerator`] owns the resolved [`CapabilityProfile`] for a graphics
//! context. Each generation request starts a [`ShaderBuilder`], appends
//! fragments in order and finishes with the completed text:
//!
//! ```rust,ignore
//! let generator = ShaderGenerator::new(CapabilityProfile::for_api(RenderApi::Vulkan));
//!
//! let source = generator
//!     .builder()
//!     .header()
//!     .uniform_buffer(&["float4 u_src_rect"], UniformStorage::DescriptorSet)
//!     .texture(&TextureSlot::new("samp0", 0))
//!     .fragment_entry_point(&FragmentStage::new().with_texcoord_inputs(1))?
//!     .body("{\n  o_col0 = SAMPLE_TEXTURE(samp0, v_tex0);\n}\n")
//!     .finish();
//! ```
//!
//! The builder is consumed and returned by every step, so each request owns
//! its buffer and the profile is only ever read.

use crate::dialect::{self, Dialect};
use crate::errors::{Result, ShaderGenError};
use crate::profile::{CapabilityProfile, HostCapabilities};
use crate::stage::{FragmentStage, TextureSlot, UniformStorage, VertexStage};

/// Produces shader sources for one resolved capability profile.
#[derive(Debug, Clone)]
pub struct ShaderGenerator {
    profile: CapabilityProfile,
}

impl ShaderGenerator {
    #[must_use]
    pub fn new(profile: CapabilityProfile) -> Self {
        Self { profile }
    }

    /// Resolves the profile from host capabilities and wraps it.
    #[must_use]
    pub fn from_host(host: &HostCapabilities) -> Self {
        Self::new(CapabilityProfile::resolve(host))
    }

    #[inline]
    #[must_use]
    pub fn profile(&self) -> &CapabilityProfile {
        &self.profile
    }

    /// Starts an empty source for one shader stage.
    #[must_use]
    pub fn builder(&self) -> ShaderBuilder<'_> {
        ShaderBuilder::new(&self.profile)
    }
}

/// Accumulates the text of one shader stage.
#[derive(Debug)]
#[must_use = "a ShaderBuilder does nothing until `finish` is called"]
pub struct ShaderBuilder<'p> {
    profile: &'p CapabilityProfile,
    source: String,
}

impl<'p> ShaderBuilder<'p> {
    pub fn new(profile: &'p CapabilityProfile) -> Self {
        Self {
            profile,
            source: String::with_capacity(4096),
        }
    }

    #[inline]
    fn dialect(&self) -> Dialect {
        self.profile.dialect()
    }

    /// Version, extensions, API macros, precision and the alias table.
    pub fn header(mut self) -> Self {
        dialect::write_header(&mut self.source, self.profile);
        self
    }

    /// Declares the uniform block with `members` in layout order.
    ///
    /// `storage` only changes the output on Vulkan.
    pub fn uniform_buffer(mut self, members: &[&str], storage: UniformStorage) -> Self {
        self.dialect()
            .backend()
            .write_uniform_block(&mut self.source, self.profile, storage);

        self.source.push_str("{\n");
        for member in members {
            self.source.push_str(member);
            self.source.push_str(";\n");
        }
        self.source.push_str("};\n\n");
        self
    }

    /// Declares a 2D texture.
    ///
    /// | Dialect              | Binding                                   |
    /// |----------------------|-------------------------------------------|
    /// | Vulkan               | `index + 1` (binding 0 is the UBO)        |
    /// | GL / GLES            | `index` with binding layout, else implicit |
    /// | HLSL                 | `t<index>` texture + `s<index>` sampler   |
    ///
    /// Slot collisions are not detected.
    pub fn texture(mut self, slot: &TextureSlot<'_>) -> Self {
        self.dialect()
            .backend()
            .write_texture(&mut self.source, self.profile, slot);
        self
    }

    /// Declares a texel buffer. Same binding rules as [`texture`](Self::texture)
    /// without the Vulkan offset.
    pub fn texture_buffer(mut self, slot: &TextureSlot<'_>) -> Self {
        self.dialect()
            .backend()
            .write_texture_buffer(&mut self.source, self.profile, slot);
        self
    }

    /// Declares the vertex stage interface and the `main` signature.
    pub fn vertex_entry_point(mut self, stage: &VertexStage<'_>) -> Self {
        self.dialect()
            .backend()
            .write_vertex_entry(&mut self.source, self.profile, stage);
        self
    }

    /// Declares the fragment stage interface and the `main` signature.
    ///
    /// Fails with [`ShaderGenError::InvalidConfiguration`] when more than one
    /// color output is requested without dual-source blending, which has no
    /// binding scheme in any dialect.
    pub fn fragment_entry_point(mut self, stage: &FragmentStage<'_>) -> Result<Self> {
        if stage.num_color_outputs > 1 && !self.profile.supports_dual_source_blend() {
            return Err(ShaderGenError::InvalidConfiguration(format!(
                "{} color outputs requested but dual-source blending is not supported",
                stage.num_color_outputs
            )));
        }

        self.dialect()
            .backend()
            .write_fragment_entry(&mut self.source, self.profile, stage);
        Ok(self)
    }

    /// Appends the shader body verbatim.
    pub fn body(mut self, body: &str) -> Self {
        self.source.push_str(body);
        self
    }

    /// The text accumulated so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns the completed source.
    #[must_use]
    pub fn finish(self) -> String {
        self.source
    }
}
