use crate::{
    db::{DbPool, OrmConn},
    security::token::TokenIssuer,
};

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub orm: OrmConn,
    pub tokens: TokenIssuer,
}
