//! Content module - the data model served by the content API

mod comment;
mod node;

pub use comment::{CommentInput, CommentResult, CreatedComment};
pub use node::{
    build_threads, Author, Avatar, Comment, CommentAuthor, CommentThread, Connection, Edge, Node,
    Post, Term,
};
