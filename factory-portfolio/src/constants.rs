/// Asset locations relative to the Bevy asset root.
pub mod path;

/// Native overlay readout styling and refresh cadence.
pub mod overlay;
