use crate::foundation::core::{ColorPair, Rgba8};

/// Curated top-to-bottom gradient pairs.
pub const PALETTE: [ColorPair; 10] = [
    // blue -> green
    ColorPair::new(Rgba8::opaque(41, 128, 185), Rgba8::opaque(39, 174, 96)),
    // purple -> orange
    ColorPair::new(Rgba8::opaque(142, 68, 173), Rgba8::opaque(230, 126, 34)),
    // red -> yellow
    ColorPair::new(Rgba8::opaque(231, 76, 60), Rgba8::opaque(241, 196, 15)),
    // light blue -> purple
    ColorPair::new(Rgba8::opaque(52, 152, 219), Rgba8::opaque(155, 89, 182)),
    // deep green -> green
    ColorPair::new(Rgba8::opaque(22, 160, 133), Rgba8::opaque(39, 174, 96)),
    // orange -> red
    ColorPair::new(Rgba8::opaque(230, 126, 34), Rgba8::opaque(231, 76, 60)),
    // grey -> cyan
    ColorPair::new(Rgba8::opaque(85, 98, 112), Rgba8::opaque(78, 205, 196)),
    // pink -> violet
    ColorPair::new(Rgba8::opaque(253, 121, 168), Rgba8::opaque(120, 119, 198)),
    // navy -> bright blue
    ColorPair::new(Rgba8::opaque(30, 60, 114), Rgba8::opaque(18, 194, 233)),
    // bright red -> pink
    ColorPair::new(Rgba8::opaque(255, 107, 107), Rgba8::opaque(255, 159, 243)),
];

/// Pick a palette entry uniformly at random. Consumes exactly one draw from `rng`.
pub fn pick(rng: &mut fastrand::Rng) -> ColorPair {
    PALETTE[pick_index(rng)]
}

pub(crate) fn pick_index(rng: &mut fastrand::Rng) -> usize {
    rng.usize(..PALETTE.len())
}

#[cfg(test)]
#[path = "../../tests/unit/render/palette.rs"]
mod tests;
