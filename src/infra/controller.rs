use std::sync::Arc;

use async_trait::async_trait;
use salvo::{http::StatusCode, writer::Json, Depot, FlowCtrl, Handler, Request, Response};

use crate::app::resource::User;
use crate::app::use_case::{ServiceOutcome, UserApi};
use crate::error::http::BadRequest;

macro_rules! map_res_err {
    ($result:ident, $response:ident) => {
        match $result {
            Err(err) => {
                $response.render(err);
                return;
            }
            Ok(ok) => ok,
        }
    };
}

pub struct HealthCheckController;

#[async_trait]
impl Handler for HealthCheckController {
    async fn handle(&self, _: &mut Request, _: &mut Depot, res: &mut Response, _: &mut FlowCtrl) {
        res.set_status_code(StatusCode::OK);
    }
}

pub struct CreateUserController<A> {
    service: Arc<A>,
}

impl<A> CreateUserController<A> {
    pub fn new(service: Arc<A>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl<A: UserApi + 'static> Handler for CreateUserController<A> {
    async fn handle(&self, req: &mut Request, _: &mut Depot, res: &mut Response, _: &mut FlowCtrl) {
        let result: Result<User, _> = req.parse_body().await.map_err(BadRequest::from);
        let resource = map_res_err!(result, res);

        tracing::debug!(
            first_name = %resource.first_name,
            last_name = %resource.last_name,
            email = %resource.email,
            country = %resource.country,
            "submitted user"
        );

        match self.service.create_user(resource).await {
            ServiceOutcome::Success(user) => {
                tracing::info!("user created successfully");
                res.render(Json(user));
                res.set_status_code(StatusCode::CREATED);
            }
            ServiceOutcome::InvalidData(errors) => {
                tracing::info!("invalid data submission");
                tracing::debug!(?errors, "errors returned");
                res.render(Json(errors));
                res.set_status_code(StatusCode::BAD_REQUEST);
            }
            ServiceOutcome::Conflict => {
                tracing::info!("attempt made to create a user that already exists");
                res.set_status_code(StatusCode::CONFLICT);
            }
            ServiceOutcome::Error(err) => {
                tracing::error!(error = %err, "error encountered when creating user");
                res.set_status_code(StatusCode::INTERNAL_SERVER_ERROR);
            }
            outcome => {
                tracing::error!(?outcome, "unexpected outcome creating user");
                res.set_status_code(StatusCode::INTERNAL_SERVER_ERROR);
            }
        }
    }
}

pub struct GetUserController<A> {
    service: Arc<A>,
}

impl<A> GetUserController<A> {
    pub fn new(service: Arc<A>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl<A: UserApi + 'static> Handler for GetUserController<A> {
    async fn handle(&self, req: &mut Request, _: &mut Depot, res: &mut Response, _: &mut FlowCtrl) {
        let user_id = match req.params().get("user_id") {
            Some(id) if !id.is_empty() => id.clone(),
            _ => {
                tracing::info!("no user id in url");
                res.set_status_code(StatusCode::BAD_REQUEST);
                return;
            }
        };

        match self.service.get_user(&user_id).await {
            ServiceOutcome::Success(user) => {
                tracing::info!("user fetched successfully");
                tracing::debug!(%user_id, "user found");
                res.render(Json(user));
                res.set_status_code(StatusCode::OK);
            }
            ServiceOutcome::NotFound => {
                tracing::info!("user not found");
                tracing::debug!(%user_id, "no user matches id");
                res.set_status_code(StatusCode::NOT_FOUND);
            }
            ServiceOutcome::Error(err) => {
                tracing::error!(error = %err, "error encountered when fetching user");
                res.set_status_code(StatusCode::INTERNAL_SERVER_ERROR);
            }
            outcome => {
                tracing::error!(?outcome, "unexpected outcome fetching user");
                res.set_status_code(StatusCode::INTERNAL_SERVER_ERROR);
            }
        }
    }
}

pub struct GetAllUsersController<A> {
    service: Arc<A>,
}

impl<A> GetAllUsersController<A> {
    pub fn new(service: Arc<A>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl<A: UserApi + 'static> Handler for GetAllUsersController<A> {
    async fn handle(&self, _: &mut Request, _: &mut Depot, res: &mut Response, _: &mut FlowCtrl) {
        match self.service.get_all_users().await {
            ServiceOutcome::Success(users) => {
                tracing::info!("users fetched successfully");
                res.render(Json(users));
                res.set_status_code(StatusCode::OK);
            }
            ServiceOutcome::Error(err) => {
                tracing::error!(error = %err, "error encountered when fetching users");
                res.set_status_code(StatusCode::INTERNAL_SERVER_ERROR);
            }
            outcome => {
                tracing::error!(?outcome, "unexpected outcome fetching users");
                res.set_status_code(StatusCode::INTERNAL_SERVER_ERROR);
            }
        }
    }
}
