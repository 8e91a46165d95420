use async_graphql::MergedObject;
mod posts;
mod profiles;
mod users;

#[derive(MergedObject, Default)]
pub struct Queries(users::UserQueries, profiles::ProfileQueries, posts::PostQueries);
