use std::fmt::Debug;

use relay_di::Build;
use relay_shared_contracts::id::IdService;
use relay_utils::trace_instrument;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Build)]
pub struct IdServiceImpl;

impl IdService for IdServiceImpl {
    #[trace_instrument(skip(self))]
    fn generate<I: From<Uuid> + Debug + 'static>(&self) -> I {
        Uuid::now_v7().into()
    }
}
