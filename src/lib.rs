//! Motor do quadro Kanban de publicações do DJE.
//!
//! A biblioteca expõe:
//! - [`api`] — cliente HTTP dos endpoints `/publicacoes` e o trait
//!   [`api::PublicationApi`] usado como costura para testes;
//! - [`board`] — o motor de estado do quadro: coleção de publicações,
//!   cursor de paginação compartilhado, regras de transição do fluxo,
//!   debounce de busca e projeção por coluna;
//! - [`config`] e [`error`] — configuração e erros de nível superior.

pub mod api;
pub mod board;
pub mod config;
pub mod error;
