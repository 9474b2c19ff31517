/// A named GraphQL document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub name: &'static str,
    pub document: &'static str,
}

pub const USER_BY_LOGIN: Operation = Operation {
    name: "UserByLogin",
    document: r#"query UserByLogin($username: String!) {
  user(login: $username) {
    name
    url
    bio
    id
    viewerIsFollowing
  }
}"#,
};

pub const FOLLOW_USER: Operation = Operation {
    name: "FollowUser",
    document: r#"mutation FollowUser($userId: ID!) {
  followUser(input: { userId: $userId }) {
    user {
      id
      viewerIsFollowing
    }
  }
}"#,
};

pub const UNFOLLOW_USER: Operation = Operation {
    name: "UnfollowUser",
    document: r#"mutation UnfollowUser($userId: ID!) {
  unfollowUser(input: { userId: $userId }) {
    user {
      id
      viewerIsFollowing
    }
  }
}"#,
};
