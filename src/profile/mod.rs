//! Capability Profile
//!
//! Resolves host capabilities once per graphics context into the immutable
//! facts every emission primitive reads:
//!
//! | Fact                   | Derived from                                             |
//! |------------------------|----------------------------------------------------------|
//! | `is_glsl`              | API is not `D3D11`                                       |
//! | `use_interface_blocks` | Vulkan, or GL / GLES 3.2                                 |
//! | `use_binding_layout`   | Vulkan, GLES 3.1, GL 4.2, or the three layout extensions |
//! | `version`              | driver version string, clamped (GL / GLES only)          |
//!
//! The profile has no setters. Share it by reference or behind an `Arc`
//! across generation threads.

mod host;
mod version;

pub use host::{GlFeatures, HostCapabilities, RenderApi};
pub use version::{DESKTOP_CEILING, DESKTOP_FALLBACK, ES_CEILING, ES_FALLBACK, GlslVersion};

use crate::dialect::Dialect;

/// Immutable, resolved view of what the target shading language supports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityProfile {
    render_api: RenderApi,
    dialect: Dialect,
    features: GlFeatures,
    supports_dual_source_blend: bool,
    use_interface_blocks: bool,
    use_binding_layout: bool,
    version: Option<GlslVersion>,
}

impl CapabilityProfile {
    /// Resolves a profile from host capabilities.
    ///
    /// A malformed version string is logged and replaced by the dialect
    /// default; resolution itself never fails.
    #[must_use]
    pub fn resolve(host: &HostCapabilities) -> Self {
        let render_api = host.render_api;
        let dialect = Dialect::from_api(render_api);
        let is_vulkan = render_api == RenderApi::Vulkan;
        let features = host.features;

        let (use_interface_blocks, use_binding_layout) = if dialect.is_glsl() {
            (
                is_vulkan || features.intersects(GlFeatures::GL_3_2 | GlFeatures::GLES_3_2),
                is_vulkan
                    || features.intersects(GlFeatures::GLES_3_1 | GlFeatures::GL_4_2)
                    || features.contains(GlFeatures::BINDING_LAYOUT_EXTENSIONS),
            )
        } else {
            (false, false)
        };

        let version = match render_api {
            RenderApi::OpenGL => Some(GlslVersion::resolve(
                host.shading_language_version.as_deref(),
                false,
            )),
            RenderApi::OpenGLES => Some(GlslVersion::resolve(
                host.shading_language_version.as_deref(),
                true,
            )),
            RenderApi::D3D11 | RenderApi::Vulkan => None,
        };

        let profile = Self {
            render_api,
            dialect,
            features,
            supports_dual_source_blend: host.dual_source_blend,
            use_interface_blocks,
            use_binding_layout,
            version,
        };

        log::debug!(
            "Resolved shader profile: {:?}, version '{}', interface blocks: {}, binding layout: {}, dual-source: {}",
            profile.dialect,
            profile.version_string(),
            profile.use_interface_blocks,
            profile.use_binding_layout,
            profile.supports_dual_source_blend,
        );

        profile
    }

    /// Shorthand for resolving a profile for `render_api` with no optional
    /// capabilities.
    #[must_use]
    pub fn for_api(render_api: RenderApi) -> Self {
        Self::resolve(&HostCapabilities::new(render_api))
    }

    #[inline]
    #[must_use]
    pub fn render_api(&self) -> RenderApi {
        self.render_api
    }

    #[inline]
    #[must_use]
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    #[inline]
    #[must_use]
    pub fn features(&self) -> GlFeatures {
        self.features
    }

    #[inline]
    #[must_use]
    pub fn has_feature(&self, feature: GlFeatures) -> bool {
        self.features.contains(feature)
    }

    #[inline]
    #[must_use]
    pub fn is_glsl(&self) -> bool {
        self.dialect.is_glsl()
    }

    #[inline]
    #[must_use]
    pub fn is_vulkan(&self) -> bool {
        self.render_api == RenderApi::Vulkan
    }

    #[inline]
    #[must_use]
    pub fn supports_dual_source_blend(&self) -> bool {
        self.supports_dual_source_blend
    }

    #[inline]
    #[must_use]
    pub fn use_interface_blocks(&self) -> bool {
        self.use_interface_blocks
    }

    #[inline]
    #[must_use]
    pub fn use_binding_layout(&self) -> bool {
        self.use_binding_layout
    }

    /// The resolved GL / GLES language version. `None` for Vulkan and D3D11.
    #[inline]
    #[must_use]
    pub fn glsl_version(&self) -> Option<GlslVersion> {
        self.version
    }

    /// The `#version` directive for this profile, or an empty string for D3D11.
    #[must_use]
    pub fn version_string(&self) -> String {
        match self.render_api {
            RenderApi::OpenGL | RenderApi::OpenGLES => self
                .version
                .as_ref()
                .map(GlslVersion::directive)
                .unwrap_or_default(),
            RenderApi::Vulkan => VULKAN_VERSION_DIRECTIVE.to_string(),
            RenderApi::D3D11 => String::new(),
        }
    }
}

/// Fixed directive for Vulkan GLSL.
pub const VULKAN_VERSION_DIRECTIVE: &str = "#version 450 core";
