/// Use cases module containing application business logic orchestration
mod refine_bom;

pub use refine_bom::RefineBomUseCase;
