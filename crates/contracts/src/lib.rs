//! Общие контракты админки: записи коллекций, схемы валидации и
//! headless-компоненты CRUD (хранилище, список, диалог, уведомления).

pub mod domain;
pub mod shared;
