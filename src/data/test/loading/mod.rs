use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::data::loading::{LoadingParams, ModelLoader, SortDirection, DEFAULT_PAGE_LENGTH};

mod order;
mod paginate;
mod search;
