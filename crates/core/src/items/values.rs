//! Plain values accepted as nodes. They compare by value, so the tracker
//! does not record them.

use super::Node;

impl Node for String {
    fn tracks_identity(&self) -> bool {
        false
    }
}

impl Node for &'static str {
    fn tracks_identity(&self) -> bool {
        false
    }
}

impl Node for Vec<String> {
    fn tracks_identity(&self) -> bool {
        false
    }
}
