//! Stage Interface Descriptors
//!
//! Plain data describing what a shader stage consumes and produces. Order is
//! significant everywhere: it decides emitted locations and semantic indices,
//! so a vertex stage and the fragment stage consuming it must list their
//! varyings in the same order.

/// An extra varying passed between stages, e.g. `("nointerpolation", "uint v_flags")`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Varying<'a> {
    /// Interpolation or storage qualifier, emitted in front of the declaration.
    pub qualifier: &'a str,
    /// Logical type and name, e.g. `float4 v_extra`.
    pub type_and_name: &'a str,
}

impl<'a> Varying<'a> {
    #[must_use]
    pub const fn new(qualifier: &'a str, type_and_name: &'a str) -> Self {
        Self {
            qualifier,
            type_and_name,
        }
    }
}

/// A sampled texture or texel buffer bound at a logical slot.
///
/// The emitted binding number depends on the dialect; see
/// [`ShaderBuilder::texture`](crate::ShaderBuilder::texture).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureSlot<'a> {
    pub name: &'a str,
    pub index: u32,
    /// Integer element type. Only meaningful for texel buffers.
    pub is_integer: bool,
    /// Unsigned integer element type. Only meaningful when `is_integer` is set.
    pub is_unsigned: bool,
}

impl<'a> TextureSlot<'a> {
    /// A float texture or texel buffer.
    #[must_use]
    pub const fn new(name: &'a str, index: u32) -> Self {
        Self {
            name,
            index,
            is_integer: false,
            is_unsigned: false,
        }
    }

    /// An integer texel buffer, signed or unsigned.
    #[must_use]
    pub const fn integer(name: &'a str, index: u32, is_unsigned: bool) -> Self {
        Self {
            name,
            index,
            is_integer: true,
            is_unsigned,
        }
    }
}

/// Where uniform buffer members live on Vulkan.
///
/// Other dialects have a single uniform block form and ignore this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UniformStorage {
    /// `layout(std140, set = 0, binding = 0) uniform UBOBlock`
    #[default]
    DescriptorSet,
    /// `layout(push_constant) uniform PushConstants`
    PushConstant,
}

/// Interface of a vertex stage entry point.
///
/// Outputs are always emitted in the order colors, texcoords, additional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexStage<'a> {
    /// Vertex attributes as `type name`, e.g. `float4 a_pos`.
    pub attributes: Vec<&'a str>,
    /// Number of `float4 v_col<i>` outputs.
    pub num_color_outputs: u32,
    /// Number of `float2 v_tex<i>` outputs.
    pub num_texcoord_outputs: u32,
    pub additional_outputs: Vec<Varying<'a>>,
    /// Expose the vertex index as `v_id`.
    pub declare_vertex_id: bool,
    /// Appended to the `VertexData` interface block name.
    pub block_suffix: &'a str,
}

impl<'a> VertexStage<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_attributes(mut self, attributes: &[&'a str]) -> Self {
        self.attributes = attributes.to_vec();
        self
    }

    #[must_use]
    pub fn with_color_outputs(mut self, count: u32) -> Self {
        self.num_color_outputs = count;
        self
    }

    #[must_use]
    pub fn with_texcoord_outputs(mut self, count: u32) -> Self {
        self.num_texcoord_outputs = count;
        self
    }

    #[must_use]
    pub fn with_additional_outputs(mut self, outputs: &[Varying<'a>]) -> Self {
        self.additional_outputs = outputs.to_vec();
        self
    }

    #[must_use]
    pub fn with_vertex_id(mut self) -> Self {
        self.declare_vertex_id = true;
        self
    }

    #[must_use]
    pub fn with_block_suffix(mut self, suffix: &'a str) -> Self {
        self.block_suffix = suffix;
        self
    }

    /// The fragment stage consuming exactly this stage's outputs.
    #[must_use]
    pub fn matching_fragment(&self) -> FragmentStage<'a> {
        FragmentStage {
            num_color_inputs: self.num_color_outputs,
            num_texcoord_inputs: self.num_texcoord_outputs,
            additional_inputs: self.additional_outputs.clone(),
            block_suffix: self.block_suffix,
            ..FragmentStage::default()
        }
    }
}

/// Interface of a fragment stage entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentStage<'a> {
    /// Number of `float4 v_col<i>` inputs.
    pub num_color_inputs: u32,
    /// Number of `float2 v_tex<i>` inputs.
    pub num_texcoord_inputs: u32,
    pub additional_inputs: Vec<Varying<'a>>,
    /// Expose the fragment coordinate as `v_pos`.
    pub declare_frag_coord: bool,
    /// Number of `float4 o_col<i>` outputs. More than one requires dual-source blending.
    pub num_color_outputs: u32,
    /// Expose the depth output as `o_depth`.
    pub depth_output: bool,
    /// Appended to the `VertexData` interface block name.
    pub block_suffix: &'a str,
}

impl Default for FragmentStage<'_> {
    fn default() -> Self {
        Self {
            num_color_inputs: 0,
            num_texcoord_inputs: 0,
            additional_inputs: Vec::new(),
            declare_frag_coord: false,
            num_color_outputs: 1,
            depth_output: false,
            block_suffix: "",
        }
    }
}

impl<'a> FragmentStage<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_color_inputs(mut self, count: u32) -> Self {
        self.num_color_inputs = count;
        self
    }

    #[must_use]
    pub fn with_texcoord_inputs(mut self, count: u32) -> Self {
        self.num_texcoord_inputs = count;
        self
    }

    #[must_use]
    pub fn with_additional_inputs(mut self, inputs: &[Varying<'a>]) -> Self {
        self.additional_inputs = inputs.to_vec();
        self
    }

    #[must_use]
    pub fn with_frag_coord(mut self) -> Self {
        self.declare_frag_coord = true;
        self
    }

    #[must_use]
    pub fn with_color_outputs(mut self, count: u32) -> Self {
        self.num_color_outputs = count;
        self
    }

    #[must_use]
    pub fn with_depth_output(mut self) -> Self {
        self.depth_output = true;
        self
    }

    #[must_use]
    pub fn with_block_suffix(mut self, suffix: &'a str) -> Self {
        self.block_suffix = suffix;
        self
    }
}
