pub mod grafikon_repository;
pub mod tabela_repository;

pub use grafikon_repository::GrafikonRepository;
pub use tabela_repository::TabelaRepository;
