mod coming_soon;

pub use coming_soon::ComingSoonPage;
