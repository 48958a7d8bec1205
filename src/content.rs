/// Alert shown after the user taps the notify button
pub const NOTIFY_MESSAGE: &str = "You're on the list! We'll let you know as soon as we launch.";

pub const HEADLINE: &str = "Coming Soon";
pub const TAGLINE: &str = "We're putting the finishing touches on something new.";
pub const NOTIFY_BUTTON_LABEL: &str = "Notify me at launch";
