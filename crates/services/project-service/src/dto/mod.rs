//! Request and response objects exchanged with the project API.

mod request;
mod response;

pub use request::{
    ProjectCreateRequest, ProjectDeleteRequest, ProjectModifyRequest, ProjectQueryRequest,
};
pub use response::{ProjectResponse, ProjectVo};
