



/// Image loader and simulator driver tests.
pub mod sim;
