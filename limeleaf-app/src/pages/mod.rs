mod comment_thread;
mod communities;
mod create_community;
mod create_post;
mod feed;
mod post;

#[derive(Debug, Clone, Copy, Default)]
pub enum Page {
    #[default]
    Home,
    Popular,
    Communities,
    CreateCommunity,
    CreatePost,
    Community,
    CreatePostInCommunity,
    Post,
    CommentThread,
}

impl Page {
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Popular => "/popular",
            Self::Communities => "/communities",
            Self::CreateCommunity => "/community/create",
            Self::CreatePost => "/create-post",
            Self::Community => "/community/:communityName",
            Self::CreatePostInCommunity => "/community/:communityName/create-post",
            Self::Post => "/community/:communityName/:post/:id",
            Self::CommentThread => "/community/:communityName/:post/:id/comment-thread/:commentId",
        }
    }
}

pub use self::{
    comment_thread::*, communities::*, create_community::*, create_post::*, feed::*, post::*,
};
