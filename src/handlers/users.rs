//! # User Management gRPC Handlers
//!
//! `user.v1.UserService`의 네 가지 단항 RPC를 처리합니다.
//! 요청 메시지를 도메인 타입으로 변환해 [`UserService`]에 위임하고,
//! 결과를 응답 메시지 또는 `tonic::Status`로 매핑합니다.
//!
//! | RPC | 요청 | 응답 | 실패 상태 |
//! |-----|------|------|-----------|
//! | `CreateUser` | `CreateUserRequest` | `User` | `INTERNAL` |
//! | `GetUser` | `GetUserRequest` | `User` | `NOT_FOUND`, `INTERNAL` |
//! | `UpdateUser` | `UpdateUserRequest` | `User` | `NOT_FOUND`, `INTERNAL` |
//! | `DeleteUser` | `DeleteUserRequest` | `Empty` | `INTERNAL` |
//!
//! `NOT_FOUND` 응답에는 본문이 없습니다. 호출자는 항상 상태 코드를 먼저 확인해야 합니다.

use std::sync::Arc;

use log::debug;
use tonic::{Request, Response, Status};

use crate::domain::dto::users::UpdateUserCommand;
use crate::domain::entities::users::NewUser;
use crate::proto::user_v1::{
    self,
    user_service_server::UserService as UserServiceRpc,
    CreateUserRequest, DeleteUserRequest, GetUserRequest, UpdateUserRequest,
};
use crate::services::users::UserService;

/// gRPC 파사드
#[derive(Clone)]
pub struct UserGrpcHandler {
    user_service: Arc<UserService>,
}

impl UserGrpcHandler {
    pub fn new(user_service: Arc<UserService>) -> Self {
        Self { user_service }
    }
}

#[tonic::async_trait]
impl UserServiceRpc for UserGrpcHandler {
    async fn create_user(
        &self,
        request: Request<CreateUserRequest>,
    ) -> Result<Response<user_v1::User>, Status> {
        let new_user = NewUser::from(request.into_inner());
        debug!("CreateUser: email={}", new_user.email);

        let created = self.user_service.create_user(new_user).await?;

        Ok(Response::new(created.into()))
    }

    async fn get_user(
        &self,
        request: Request<GetUserRequest>,
    ) -> Result<Response<user_v1::User>, Status> {
        let GetUserRequest { id } = request.into_inner();
        debug!("GetUser: id={}", id);

        let user = self.user_service.get_user(&id).await?;

        Ok(Response::new(user.into()))
    }

    async fn update_user(
        &self,
        request: Request<UpdateUserRequest>,
    ) -> Result<Response<user_v1::User>, Status> {
        let UpdateUserCommand { user, mask } = request.into_inner().into();
        debug!("UpdateUser: id={}", user.id);

        let updated = self.user_service.update_user(user, &mask).await?;

        Ok(Response::new(updated.into()))
    }

    async fn delete_user(
        &self,
        request: Request<DeleteUserRequest>,
    ) -> Result<Response<()>, Status> {
        let DeleteUserRequest { id } = request.into_inner();
        debug!("DeleteUser: id={}", id);

        self.user_service.delete_user(&id).await?;

        Ok(Response::new(()))
    }
}
