/// Circle that reveals the bright headline layer around the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealMask {
    radius: f64,
    center: Option<(f64, f64)>,
}

impl RevealMask {
    pub fn new(radius: f64) -> Self {
        Self { radius, center: None }
    }

    /// Coordinates are local to the headline's bounding box.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.center = Some((x, y));
    }

    /// Pointer left the headline: the mask snaps away.
    pub fn clear(&mut self) {
        self.center = None;
    }

    pub fn center(&self) -> Option<(f64, f64)> {
        self.center
    }

    /// Inline style of the bright layer. The mask moves without transition.
    pub fn bright_layer_style(&self) -> String {
        match self.center {
            Some((x, y)) => {
                let gradient = format!(
                    "radial-gradient(circle {r}px at {x}px {y}px, #000 0%, #000 55%, transparent 100%)",
                    r = self.radius,
                );
                format!(
                    "opacity: 1; -webkit-mask-image: {gradient}; mask-image: {gradient}; transition: none;"
                )
            }
            None => "opacity: 0; -webkit-mask-image: none; mask-image: none;".to_string(),
        }
    }
}

/// Glow layer intensity follows the light switch.
pub fn glow_layer_style(light_on: bool) -> String {
    let (opacity, blur) = if light_on { (0.9, 18) } else { (0.0, 0) };
    format!(
        "opacity: {opacity}; filter: blur({blur}px); transition: opacity 0.4s ease, filter 0.4s ease;"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_follows_pointer() {
        let mut mask = RevealMask::new(120.0);
        mask.move_to(50.0, 50.0);
        assert_eq!(mask.center(), Some((50.0, 50.0)));
        assert!(mask.bright_layer_style().contains("circle 120px at 50px 50px"));

        mask.move_to(200.0, 10.0);
        assert_eq!(mask.center(), Some((200.0, 10.0)));
        let style = mask.bright_layer_style();
        assert!(style.contains("at 200px 10px"));
        assert!(style.contains("transition: none"));
    }

    #[test]
    fn hidden_until_pointer_enters_and_after_it_leaves() {
        let mut mask = RevealMask::new(120.0);
        assert!(mask.bright_layer_style().starts_with("opacity: 0"));

        mask.move_to(10.5, 3.25);
        assert!(mask.bright_layer_style().contains("at 10.5px 3.25px"));

        mask.clear();
        assert_eq!(mask.center(), None);
        assert!(mask.bright_layer_style().starts_with("opacity: 0"));
    }

    #[test]
    fn glow_tracks_light() {
        assert!(glow_layer_style(true).starts_with("opacity: 0.9; filter: blur(18px)"));
        assert!(glow_layer_style(false).starts_with("opacity: 0; filter: blur(0px)"));
    }
}
