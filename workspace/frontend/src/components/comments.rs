mod comment_section;

pub use comment_section::CommentSection;
