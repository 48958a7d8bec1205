mod notify_button;

pub use notify_button::NotifyButton;
