//! The six portal pages.
//!
//! Every page owns its selection state exclusively, discards its fetched
//! records on unmount, and re-reads the language store at render time so a
//! switch is reflected before the next interaction.

pub mod education;
pub mod health;
pub mod help;
pub mod home;
pub mod legal;
pub mod stories;

pub use education::EducationPage;
pub use health::HealthPage;
pub use help::HelpPage;
pub use home::HomePage;
pub use legal::LegalPage;
pub use stories::StoriesPage;
