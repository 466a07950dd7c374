use tonic::Status;

use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::grpc::validation;
use crate::proto::RegisterRequest;
use crate::proto::RegisterResponse;

pub async fn register<S: AuthServicePort>(
    service: &S,
    request: RegisterRequest,
) -> Result<RegisterResponse, Status> {
    validation::name(&request.name)?;
    validation::email(&request.email)?;
    validation::password(&request.password)?;

    let command = RegisterCommand::new(request.name, request.email, request.password);
    let user_id = service.register(command).await?;

    Ok(RegisterResponse { user_id: user_id.0 })
}
