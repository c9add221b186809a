use sea_orm::{DbErr, TransactionError, UpdateResult};
use std::error::Error;

pub trait FlattenTransactionResultExt<T> {
    fn flatten_res(self) -> T;
}

impl<T, E> FlattenTransactionResultExt<Result<T, E>> for Result<T, TransactionError<E>>
where
    E: From<DbErr> + Error,
{
    fn flatten_res(self) -> Result<T, E> {
        self.map_err(|err| match err {
            TransactionError::Connection(err) => err.into(),
            TransactionError::Transaction(err) => err,
        })
    }
}

pub trait RequireRecord<T> {
    /// Turn a missing row into [`DbErr::RecordNotFound`] naming `what` was looked up.
    fn require(self, what: &str) -> Result<T, DbErr>;
}

impl<T> RequireRecord<T> for Result<Option<T>, DbErr> {
    fn require(self, what: &str) -> Result<T, DbErr> {
        self?.ok_or_else(|| DbErr::RecordNotFound(format!("{what} not found")))
    }
}

pub trait RequireAffected {
    /// An update or delete that matched no row targets something that does not exist.
    fn require_affected(self, what: &str) -> Result<u64, DbErr>;
}

impl RequireAffected for Result<UpdateResult, DbErr> {
    fn require_affected(self, what: &str) -> Result<u64, DbErr> {
        let res = self?;
        if res.rows_affected == 0 {
            return Err(DbErr::RecordNotFound(format!("{what} not found")));
        }
        Ok(res.rows_affected)
    }
}
