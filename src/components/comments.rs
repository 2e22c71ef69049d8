//! Threaded comment list and the comment form

use super::{Component, RenderContext};
use crate::content::{build_threads, Comment, CommentThread};
use crate::helpers::{api_time_tag, html_escape};

pub struct Comments<'a> {
    /// Database id of the commented node; the form is omitted without it
    pub database_id: Option<i64>,
    pub comments: &'a [Comment],
}

impl<'a> Comments<'a> {
    pub fn new(database_id: Option<i64>, comments: &'a [Comment]) -> Self {
        Self {
            database_id,
            comments,
        }
    }
}

impl Component for Comments<'_> {
    fn render(&self, cx: &mut RenderContext<'_>) -> String {
        let theme = cx.theme();
        cx.styles.insert("hb-comments", || {
            format!(
                ".hb-comments{{margin-top:{gap}}}\
                 .hb-comments ul{{list-style:none;padding-left:0}}\
                 .hb-comments ul ul{{padding-left:{indent};border-left:2px solid rgba(0,0,0,0.08)}}\
                 .hb-comment{{margin:{unit} 0}}\
                 .hb-comment-meta{{font-size:0.875rem;color:rgba(0,0,0,0.6)}}\
                 .hb-comment-form{{display:flex;flex-direction:column;gap:{unit};max-width:600px}}\
                 .hb-comment-form input,.hb-comment-form textarea{{font:inherit;padding:{unit}}}\
                 .hb-comment-form button{{align-self:flex-start;padding:6px 16px;border:0;border-radius:4px;\
                 background:{primary};color:{white};font:inherit;cursor:pointer}}",
                gap = theme.spacing(5.0),
                indent = theme.spacing(3.0),
                unit = theme.spacing(1.0),
                primary = theme.palette.primary,
                white = theme.palette.common.white
            )
        });

        let date_format = cx.config().date_format.as_str();
        let threads = build_threads(self.comments);
        let list = if threads.is_empty() {
            "<p>No comments yet.</p>".to_string()
        } else {
            render_threads(&threads, date_format)
        };

        let heading = match self.comments.len() {
            0 => "Comments".to_string(),
            1 => "1 Comment".to_string(),
            n => format!("{} Comments", n),
        };

        let form = self.database_id.map(comment_form).unwrap_or_default();

        format!(
            r#"<section class="hb-comments" id="comments"><h3>{}</h3>{}{}</section>"#,
            heading, list, form
        )
    }
}

fn render_threads(threads: &[CommentThread<'_>], date_format: &str) -> String {
    let items: String = threads
        .iter()
        .map(|thread| {
            let comment = thread.comment;
            let date = comment
                .date
                .as_deref()
                .map(|d| format!(" &middot; {}", api_time_tag(d, date_format)))
                .unwrap_or_default();
            let replies = if thread.replies.is_empty() {
                String::new()
            } else {
                render_threads(&thread.replies, date_format)
            };
            let anchor = comment
                .database_id
                .map(|id| format!(r#" id="comment-{}""#, id))
                .unwrap_or_default();
            format!(
                r#"<li class="hb-comment"{}><div class="hb-comment-meta"><strong>{}</strong>{}</div><div class="hb-comment-body">{}</div>{}</li>"#,
                anchor,
                html_escape(comment.author_name()),
                date,
                comment.content.as_deref().unwrap_or(""),
                replies
            )
        })
        .collect();
    format!("<ul>{}</ul>", items)
}

fn comment_form(database_id: i64) -> String {
    format!(
        r#"<form class="hb-comment-form" method="post"><h4>Leave a comment</h4><input type="hidden" name="commentOn" value="{}"><input type="text" name="author" placeholder="Name" required><input type="email" name="authorEmail" placeholder="Email"><textarea name="content" rows="4" placeholder="Comment" required></textarea><button type="submit">Post comment</button></form>"#,
        database_id
    )
}
