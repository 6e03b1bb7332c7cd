use super::domain::Employee;
use super::salary::{Salary, AVERAGE_SCALE};

/// Exact, unrounded sum of the roster's salaries.
pub fn total_salary(roster: &[Employee]) -> Salary {
    roster.iter().map(|employee| employee.salary).sum()
}

/// Mean salary rounded half-to-even to two fractional digits.
///
/// Only the final division rounds; an empty roster averages to `0.00`.
pub fn average_salary(roster: &[Employee]) -> Salary {
    mean_of(roster.iter().map(|employee| employee.salary))
}

pub fn mean_of<I>(salaries: I) -> Salary
where
    I: IntoIterator<Item = Salary>,
{
    let (total, count) = salaries
        .into_iter()
        .fold((Salary::ZERO, 0u128), |(total, count), salary| {
            (total + salary, count + 1)
        });

    total.div_rounded(count, AVERAGE_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(salaries: &[&str]) -> Vec<Employee> {
        salaries
            .iter()
            .enumerate()
            .map(|(index, salary)| {
                Employee::parse(format!("Employee {index}"), salary).expect("valid salary")
            })
            .collect()
    }

    fn average(salaries: &[&str]) -> String {
        average_salary(&roster(salaries)).to_string()
    }

    #[test]
    fn empty_roster_averages_to_zero() {
        let result = average_salary(&[]);
        assert!(result.is_zero());
        assert_eq!(result.to_string(), "0.00");
    }

    #[test]
    fn averages_whole_amounts() {
        assert_eq!(average(&["10.00", "20.00"]), "15.00");
        assert_eq!(average(&["50.00", "70.00", "90.00"]), "70.00");
    }

    #[test]
    fn rounds_only_after_exact_sum() {
        assert_eq!(average(&["10.005", "10.015"]), "10.01");
        assert_eq!(average(&["0.004", "0.004", "0.004"]), "0.00");
    }

    #[test]
    fn ties_round_to_even() {
        assert_eq!(average(&["2.125"]), "2.12");
        assert_eq!(average(&["2.135"]), "2.14");
        assert_eq!(average(&["10.005", "10.025"]), "10.02");
        assert_eq!(average(&["10.025", "10.025"]), "10.02");
    }

    #[test]
    fn mixes_scales() {
        assert_eq!(average(&["100", "0.5"]), "50.25");
    }

    #[test]
    fn total_keeps_full_precision() {
        assert_eq!(total_salary(&roster(&["10.005", "10.015"])).to_string(), "20.020");
    }

    #[test]
    fn aggregation_leaves_roster_untouched() {
        let employees = roster(&["1.00", "2.00"]);
        let before = employees.clone();
        let _ = average_salary(&employees);
        assert_eq!(employees, before);
    }
}
