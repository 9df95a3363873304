use clap::Args;
use creditinder::applications::{ApplicationRegistry, ApplicationView};
use creditinder::error::AppError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Number of simulated voters swiping concurrently
    #[arg(long, default_value_t = 40)]
    pub(crate) voters: u64,
    /// Seed for the simulated voters' choices (random when omitted)
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let registry = Arc::new(ApplicationRegistry::with_samples());
    let cast = simulate_swipes(registry.clone(), args.voters, args.seed).await?;

    println!("Creditinder demo");
    println!(
        "{} applications, {} simulated voters, {} votes recorded",
        registry.len(),
        args.voters,
        cast
    );
    println!();
    for line in render_tallies(&registry) {
        println!("{line}");
    }

    Ok(())
}

/// Spawn one task per voter; each swipes a random application and votes on it.
pub(crate) async fn simulate_swipes(
    registry: Arc<ApplicationRegistry>,
    voters: u64,
    seed: Option<u64>,
) -> Result<u64, AppError> {
    let handles: Vec<_> = (0..voters)
        .map(|voter| {
            let registry = registry.clone();
            tokio::spawn(async move {
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(voter)),
                    None => StdRng::from_entropy(),
                };
                let Some(application) = registry.get_random_with(&mut rng) else {
                    return false;
                };
                registry.vote(application.id(), rng.gen_bool(0.5));
                true
            })
        })
        .collect();

    let mut cast = 0;
    for handle in handles {
        if handle.await? {
            cast += 1;
        }
    }
    Ok(cast)
}

/// One console line per application, most approved first.
pub(crate) fn render_tallies(registry: &ApplicationRegistry) -> Vec<String> {
    let mut views: Vec<ApplicationView> = registry
        .list_all()
        .iter()
        .map(|application| application.view())
        .collect();
    views.sort_by(|left, right| {
        right
            .approval_percentage
            .total_cmp(&left.approval_percentage)
            .then_with(|| left.details.applicant_name.cmp(&right.details.applicant_name))
    });

    views
        .iter()
        .map(|view| {
            format!(
                "- {} | {} {} | {} approve / {} reject | {:.1}% approval",
                view.details.applicant_name,
                view.details.loan_purpose,
                view.details.loan_amount,
                view.approval_votes,
                view.rejection_votes,
                view.approval_percentage
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn every_simulated_voter_is_tallied() {
        let registry = Arc::new(ApplicationRegistry::with_samples());

        let cast = simulate_swipes(registry.clone(), 64, Some(3))
            .await
            .expect("simulation runs");

        let total: u64 = registry
            .list_all()
            .iter()
            .map(|application| application.total_votes())
            .sum();
        assert_eq!(cast, 64);
        assert_eq!(total, 64);
    }

    #[tokio::test]
    async fn empty_registry_casts_nothing() {
        let registry = Arc::new(ApplicationRegistry::new());
        let cast = simulate_swipes(registry, 5, None)
            .await
            .expect("simulation runs");
        assert_eq!(cast, 0);
    }

    #[test]
    fn tallies_list_every_applicant() {
        let registry = ApplicationRegistry::with_samples();
        let lines = render_tallies(&registry);

        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|line| line.contains("0 approve / 0 reject")));
        assert!(lines[0].contains("Emily Chen"));
    }
}
