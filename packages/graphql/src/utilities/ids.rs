use async_graphql::ID;

/// Numeric row id behind a GraphQL `ID`; anything else is treated as unknown.
pub fn parse_id(id: &ID) -> Option<i32> {
    id.as_str().trim().parse::<i32>().ok()
}
