mod text_normalizer_test;
mod transfer_service_test;
mod voice_command_service_test;
