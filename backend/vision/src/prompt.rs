//! The fixed identification instruction sent with every image.

/// Instruction given to the vision model.
///
/// The labeled markers are load-bearing: [`crate::parse::parse_labeled`]
/// recovers the fields by scanning for them.
pub const IDENTIFY_PROMPT: &str = "Identify this plant and provide its name, a brief description, and basic care instructions. Format your response as follows: 'Name: [plant name]\n\nDescription: [brief description]\n\nCare Instructions: [basic care instructions]'";
