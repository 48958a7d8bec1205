/// Intensity of a host haptic impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactStyle {
    Light,
    Medium,
    Heavy,
}

/// Impact sent when the user asks to be notified
pub const NOTIFY_IMPACT: ImpactStyle = ImpactStyle::Medium;

impl ImpactStyle {
    /// Name accepted by the host's `impactOccurred`
    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactStyle::Light => "light",
            ImpactStyle::Medium => "medium",
            ImpactStyle::Heavy => "heavy",
        }
    }
}
