//! Frame composition: the ordered render and post-processing passes, plus
//! the star billboard material drawn in the scene pass.

/// Scene pass followed by bloom, mapped onto Bevy's bloom camera component.
pub mod post_processing;

/// Camera-facing quads for the star field, sized in world units.
pub mod star_material;
