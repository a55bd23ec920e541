mod verdict;
pub use verdict::Feedback;

mod word;
pub use word::Word;
