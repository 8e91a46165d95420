use async_graphql::*;
use graphql::queries::Queries as QueryRoot;
use graphql::mutations::Mutations as MutationRoot;

fn main() -> std::io::Result<()> {
    // SDL only depends on the types, so no connection or auth data is attached
    let schema = Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription).finish();
    println!("{}", &schema.sdl());
    Ok(())
}
