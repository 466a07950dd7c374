use tonic::Status;

use crate::domain::auth::models::AppId;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::grpc::validation;
use crate::proto::LoginRequest;
use crate::proto::LoginResponse;

pub async fn login<S: AuthServicePort>(
    service: &S,
    request: LoginRequest,
) -> Result<LoginResponse, Status> {
    validation::email(&request.email)?;
    validation::password(&request.password)?;
    validation::app_id(request.app_id)?;

    let command = LoginCommand::new(request.email, request.password, AppId(request.app_id));
    let token = service.login(command).await?;

    Ok(LoginResponse { token })
}
