use crowdfund_backend::tests::campaign_tests::{
    test_contribution_marks_approver, test_deploys_factory_and_campaign,
    test_finalized_request_is_terminal, test_manager_can_create_request,
    test_marks_caller_as_manager, test_request_flow_end_to_end,
    test_requires_minimum_contribution,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Crowdfund Backend Contract Test Runner");
    println!("======================================\n");

    // Get command line arguments
    let args: Vec<String> = std::env::args().collect();
    let test_name = args.get(1).map(|s| s.as_str()).unwrap_or("all");

    match test_name {
        "deploy" => {
            test_deploys_factory_and_campaign().await?;
        }
        "manager" => {
            test_marks_caller_as_manager().await?;
        }
        "contribute" => {
            test_contribution_marks_approver().await?;
        }
        "minimum" => {
            test_requires_minimum_contribution().await?;
        }
        "create_request" => {
            test_manager_can_create_request().await?;
        }
        "end_to_end" => {
            test_request_flow_end_to_end().await?;
        }
        "terminal" => {
            test_finalized_request_is_terminal().await?;
        }
        "all" => {
            test_deploys_factory_and_campaign().await?;
            test_marks_caller_as_manager().await?;
            test_contribution_marks_approver().await?;
            test_requires_minimum_contribution().await?;
            test_manager_can_create_request().await?;
            test_request_flow_end_to_end().await?;
            test_finalized_request_is_terminal().await?;
        }
        other => {
            println!("Unknown test: {}", other);
            println!(
                "Available: deploy, manager, contribute, minimum, create_request, end_to_end, terminal, all"
            );
            std::process::exit(1);
        }
    }

    println!("\nAll requested tests completed.");
    Ok(())
}
