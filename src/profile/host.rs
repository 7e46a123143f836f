//! Host Capability Configuration
//!
//! The values a graphics context hands to the generator after it has probed
//! the driver. Probing itself (extension strings, `glGetString`) belongs to
//! the host; this module only describes the resolved result.
//!
//! # Example
//!
//! ```rust,ignore
//! use shadergen::profile::{GlFeatures, HostCapabilities, RenderApi};
//!
//! let host = HostCapabilities {
//!     render_api: RenderApi::OpenGL,
//!     shading_language_version: Some("4.60 NVIDIA".into()),
//!     features: GlFeatures::GL_3_2 | GlFeatures::GL_4_2 | GlFeatures::GL_4_3,
//!     ..Default::default()
//! };
//! ```

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// The graphics API a renderer context was created for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RenderApi {
    #[default]
    OpenGL,
    OpenGLES,
    D3D11,
    Vulkan,
}

impl RenderApi {
    /// Returns `true` for every API whose shaders are written in a GLSL flavor.
    #[inline]
    #[must_use]
    pub fn is_glsl(self) -> bool {
        !matches!(self, Self::D3D11)
    }
}

bitflags! {
    /// Language versions and extensions reported by a GL or GLES context.
    ///
    /// Ignored for `D3D11` and `Vulkan`, whose shader language is fixed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct GlFeatures: u32 {
        const GL_3_2 = 1 << 0;
        const GL_4_2 = 1 << 1;
        const GL_4_3 = 1 << 2;
        const GLES_3_1 = 1 << 3;
        const GLES_3_2 = 1 << 4;
        const ARB_EXPLICIT_ATTRIB_LOCATION = 1 << 5;
        const ARB_EXPLICIT_UNIFORM_LOCATION = 1 << 6;
        const ARB_SHADING_LANGUAGE_420PACK = 1 << 7;
        const ARB_SHADER_STORAGE_BUFFER_OBJECT = 1 << 8;
        const EXT_BLEND_FUNC_EXTENDED = 1 << 9;

        /// Extensions that together provide explicit binding layout before GL 4.2.
        const BINDING_LAYOUT_EXTENSIONS = Self::ARB_EXPLICIT_ATTRIB_LOCATION.bits()
            | Self::ARB_EXPLICIT_UNIFORM_LOCATION.bits()
            | Self::ARB_SHADING_LANGUAGE_420PACK.bits();
    }
}

/// Capabilities resolved by the host for one graphics context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostCapabilities {
    /// The API the context was created for.
    pub render_api: RenderApi,

    /// Raw `GL_SHADING_LANGUAGE_VERSION` string. Only read for GL and GLES.
    pub shading_language_version: Option<String>,

    /// Version and extension support of a GL or GLES context.
    pub features: GlFeatures,

    /// Whether the device can blend with two fragment color outputs.
    pub dual_source_blend: bool,
}

impl HostCapabilities {
    /// Creates capabilities for `render_api` with nothing else supported.
    #[must_use]
    pub fn new(render_api: RenderApi) -> Self {
        Self {
            render_api,
            ..Default::default()
        }
    }

    /// Loads capabilities from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the capabilities to a JSON document.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
