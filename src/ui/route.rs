//! navigation between screens
use {
    crate::error::PostsError,
    std::{fmt, str::FromStr},
};

/// a screen to navigate to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// the post list (`posts`)
    Posts,
    /// a single post (`posts/{id}`)
    Post {
        /// the post to show
        id: i64,
    },
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Posts => write!(f, "posts"),
            Self::Post { id } => write!(f, "posts/{}", id),
        }
    }
}

impl FromStr for Route {
    type Err = PostsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_matches('/');

        match trimmed.split_once('/') {
            None if trimmed == "posts" => Ok(Self::Posts),
            Some(("posts", id)) => id
                .parse::<i64>()
                .map(|id| Self::Post { id })
                .map_err(|e| PostsError::Other(format!("bad post id in route {:?}: {}", s, e))),
            _ => Err(PostsError::Other(format!("unknown route {:?}", s))),
        }
    }
}

/// a back stack of routes; never empty
#[derive(Debug, Clone)]
pub struct Navigator {
    /// the visited routes, current one last
    stack: Vec<Route>,
}

impl Navigator {
    /// start navigation at `root`
    pub fn new(root: Route) -> Self {
        Self { stack: vec![root] }
    }

    /// the route on top of the stack
    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or(Route::Posts)
    }

    /// go to a new route
    pub fn push(&mut self, route: Route) {
        self.stack.push(route);
    }

    /// go back one route, returning the route that was left
    ///
    /// returns `None` when already at the root
    pub fn back(&mut self) -> Option<Route> {
        if self.stack.len() > 1 {
            self.stack.pop()
        } else {
            None
        }
    }

    /// how many routes are on the stack
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
