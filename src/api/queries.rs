//! GraphQL documents sent to the content API

pub const GET_NODE: &str = r#"
  query GetNode($uri: String!) {
    nodeByUri(uri: $uri) {
      __typename
      id
      uri
      ... on ContentNode {
        databaseId
        slug
        date
      }
      ... on NodeWithTitle {
        title
      }
      ... on NodeWithContentEditor {
        content
      }
      ... on NodeWithAuthor {
        author {
          node {
            name
            description
            uri
            avatar {
              url
            }
          }
        }
      }
      ... on Post {
        categories {
          nodes {
            name
            slug
            uri
          }
        }
        tags {
          nodes {
            name
            slug
            uri
          }
        }
      }
      ... on NodeWithComments {
        comments(first: 100, where: { order: ASC }) {
          nodes {
            id
            databaseId
            parentDatabaseId
            content
            date
            author {
              node {
                name
                url
              }
            }
          }
        }
      }
    }
  }
"#;

pub const CREATE_COMMENT: &str = r#"
  mutation CreateComment($input: CreateCommentInput!) {
    createComment(input: $input) {
      success
      comment {
        id
        databaseId
      }
    }
  }
"#;
