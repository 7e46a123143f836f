//! Cross-dialect shader source synthesis.
//!
//! One logical description of a stage interface (attributes, uniform block,
//! textures, varyings, color outputs) is turned into source text for desktop
//! GLSL, GLSL ES, Vulkan GLSL or HLSL. A shared macro surface lets a single
//! shader body compile unmodified under all four.
//!
//! ```rust,ignore
//! use shadergen::{CapabilityProfile, RenderApi, ShaderGenerator};
//!
//! let generator = ShaderGenerator::new(CapabilityProfile::for_api(RenderApi::Vulkan));
//! let vs = generator.generate_screen_quad_vertex_shader();
//! let fs = generator.generate_copy_fragment_shader()?;
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod builder;
pub mod cache;
pub mod dialect;
pub mod errors;
pub mod profile;
pub mod stage;
pub mod templates;

pub use builder::{ShaderBuilder, ShaderGenerator};
pub use cache::{CachedSource, ShaderSourceCache, source_hash};
pub use dialect::{Dialect, DialectBackend};
pub use errors::{Result, ShaderGenError};
pub use profile::{CapabilityProfile, GlFeatures, GlslVersion, HostCapabilities, RenderApi};
pub use stage::{FragmentStage, TextureSlot, UniformStorage, Varying, VertexStage};
pub use templates::ShaderTemplate;
