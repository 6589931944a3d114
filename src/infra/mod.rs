pub mod controller;
pub mod database;
pub mod service;

pub mod router {
    use std::sync::Arc;

    use salvo::{logging::Logger, Router};

    use super::controller::{
        CreateUserController, GetAllUsersController, GetUserController, HealthCheckController,
    };
    use crate::app::use_case::UserApi;

    pub fn app<A: UserApi + 'static>(service: Arc<A>) -> Router {
        Router::new()
            .push(Router::with_path("health-check").get(HealthCheckController))
            .push(
                Router::with_path("users")
                    .post(CreateUserController::new(service.clone()))
                    .get(GetAllUsersController::new(service.clone()))
                    .push(Router::with_path("<user_id>").get(GetUserController::new(service))),
            )
            .hoop(Logger)
    }
}
