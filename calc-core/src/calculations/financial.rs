//! Loans, savings growth and business ratios.

use super::amortization::{Schedule, level_payment, period_count, yearly_totals};
use super::common::{Outcome, fixed, grouped, money, money_grouped, or_not_available, plain};
use super::engine::DispatchTable;
use super::inputs::Inputs;
use crate::models::chart::palette;
use crate::models::{CalculationResult, ChartDataPoint, TrendDataPoint};

/// Growth simulations stop after this many months (1000 years).
const MAX_GROWTH_MONTHS: usize = 12_000;

/// Loan trend series longer than this are thinned to every other point.
const MAX_LOAN_TREND_POINTS: usize = 20;

pub(super) fn register(table: &mut DispatchTable) {
    table.pure("auto-loan", auto_loan);
    table.pure("mortgage", mortgage);
    table.pure("compound-interest", compound_interest);
    table.pure("loan", loan);
    table.pure("roi", roi);
    table.pure("salary", salary);
    table.pure("vat", vat);
    table.pure("break-even", break_even);
    table.pure("margin", margin);
    table.pure("rule-72", rule_of_72);
    table.pure("credit-payoff", credit_payoff);
    table.pure("net-worth", net_worth);
    table.pure("inflation", inflation);
    table.pure("down-payment", down_payment);
    table.pure("cd-ladder", cd_ladder);
}

fn auto_loan(inputs: &Inputs<'_>) -> Outcome {
    let price = inputs.number("price");
    let sales_tax_rate = inputs.number("sales_tax");
    let fees = inputs.number("fees");
    let trade_in = inputs.number("trade_in");
    let owed_on_trade = inputs.number("owed_on_trade");
    let down_payment = inputs.number("down_payment");
    let rate = inputs.number("rate");
    let term = inputs.number("term");

    // Sales tax applies to the price net of the trade-in.
    let sales_tax = (price - trade_in).max(0.0) * (sales_tax_rate / 100.0);
    let trade_equity = trade_in - owed_on_trade;
    let loan_amount = price + sales_tax + fees - down_payment - trade_equity;

    if loan_amount <= 0.0 {
        return Ok(CalculationResult::new("$0.00", "Monthly Payment")
            .with_details("You don't need a loan! Your down payment and trade-in cover the cost.")
            .with_steps(["Total cost is covered by upfront payments."]));
    }

    let monthly_rate = rate / 1200.0;
    let payment = level_payment(loan_amount, monthly_rate, term);
    let total_paid = payment * term;
    let total_interest = total_paid - loan_amount;

    let schedule = Schedule::fixed_term(loan_amount, monthly_rate, payment, period_count(term));
    let trend = yearly_totals(schedule)
        .into_iter()
        .map(|y| TrendDataPoint::stacked(format!("Yr {}", y.year), y.principal, y.interest))
        .collect();

    Ok(CalculationResult::new(money(payment)?, "Monthly Payment")
        .with_details(format!(
            "Total loan cost: ${}. You will pay ${} in interest.",
            grouped(total_paid, 0)?,
            grouped(total_interest, 0)?
        ))
        .with_steps([
            format!("Vehicle Price: ${}", grouped(price, 3)?),
            format!("+ Sales Tax & Fees: {}", money(sales_tax + fees)?),
            format!("- Down Payment & Trade: ${}", grouped(down_payment + trade_equity, 3)?),
            format!("= Loan Amount: ${}", grouped(loan_amount, 3)?),
            format!("Term: {} months @ {}%", plain(term)?, plain(rate)?),
        ])
        .with_chart(vec![
            ChartDataPoint::new("Principal", loan_amount, palette::PRIMARY),
            ChartDataPoint::new("Interest", total_interest, palette::SECONDARY),
        ])
        .with_trend(trend))
}

fn mortgage(inputs: &Inputs<'_>) -> Outcome {
    let home_price = inputs.number("home_price");
    let down_payment = inputs.number("down_payment");
    let rate = inputs.number("rate");
    let years = inputs.number("term");
    let annual_tax = inputs.number("property_tax");
    let annual_insurance = inputs.number("insurance");
    let monthly_hoa = inputs.number("hoa");

    let principal = home_price - down_payment;
    let monthly_rate = rate / 100.0 / 12.0;
    let payments = years * 12.0;
    let monthly_pi = level_payment(principal, monthly_rate, payments);

    let monthly_escrow = annual_tax / 12.0 + annual_insurance / 12.0 + monthly_hoa;
    let total_monthly = monthly_pi + monthly_escrow;
    let total_interest = monthly_pi * payments - principal;

    // Only whole years are charted. Long terms keep every other year plus
    // both ends.
    let whole_years = period_count(years.floor());
    let schedule = Schedule::fixed_term(
        principal,
        monthly_rate,
        monthly_pi,
        whole_years.saturating_mul(12),
    );
    let trend = yearly_totals(schedule)
        .into_iter()
        .filter(|y| y.year % 2 == 0 || years <= 15.0 || y.year == 1 || y.year as f64 == years)
        .map(|y| TrendDataPoint::stacked(format!("Yr {}", y.year), y.principal, y.interest))
        .collect();

    Ok(CalculationResult::new(money(total_monthly)?, "Total Monthly Payment")
        .with_details(format!("Principal & Interest: {}", money(monthly_pi)?))
        .with_steps([
            format!("Loan: ${}", grouped(principal, 3)?),
            format!("P&I: {}", money(monthly_pi)?),
            format!("Tax+Ins+HOA: {}", money(monthly_escrow)?),
        ])
        .with_chart(vec![
            ChartDataPoint::new("Principal", principal, palette::PRIMARY),
            ChartDataPoint::new("Interest", total_interest, palette::SECONDARY),
            ChartDataPoint::new("Taxes", annual_tax * years, palette::ACCENT_1),
        ])
        .with_trend(trend))
}

fn compound_interest(inputs: &Inputs<'_>) -> Outcome {
    let principal = inputs.number("principal");
    let contribution = inputs.number("monthly_contribution");
    let annual_rate = inputs.number("rate") / 100.0;
    let years = inputs.number("years");
    let frequency = inputs.text_or("frequency", "Annually");

    // Contributions land monthly either way. Annual compounding uses the
    // equivalent monthly rate.
    let monthly_rate = if frequency == "Monthly" {
        annual_rate / 12.0
    } else {
        (1.0 + annual_rate).powf(1.0 / 12.0) - 1.0
    };

    let months = period_count((years * 12.0).floor()).min(MAX_GROWTH_MONTHS);
    let mut invested = principal;
    let mut balance = principal;
    let mut trend = Vec::with_capacity(months / 12);
    for month in 1..=months {
        invested += contribution;
        balance = (balance + contribution) * (1.0 + monthly_rate);
        if month % 12 == 0 {
            trend.push(TrendDataPoint::stacked(
                format!("Yr {}", month / 12),
                invested,
                balance - invested,
            ));
        }
    }
    let earned = balance - invested;

    Ok(
        CalculationResult::new(
            money_grouped(balance, 2)?,
            format!("Total Value after {} years", plain(years)?),
        )
        .with_details(format!("Interest Earned: {}", money_grouped(earned, 3)?))
        .with_steps([
            format!("Invested: {}", money_grouped(invested, 3)?),
            format!("Compound: {frequency}"),
        ])
        .with_chart(vec![
            ChartDataPoint::new("Principal", invested, palette::PRIMARY),
            ChartDataPoint::new("Interest", earned, palette::SECONDARY),
        ])
        .with_trend(trend),
    )
}

fn loan(inputs: &Inputs<'_>) -> Outcome {
    let amount = inputs.number("amount");
    let monthly_rate = inputs.number("rate") / 1200.0;
    let months = inputs.number("months");
    let extra = inputs.number("extra");

    let base_payment = level_payment(amount, monthly_rate, months);
    let actual_payment = base_payment + extra;

    let mut total_interest = 0.0;
    let mut months_taken = 0;
    let mut trend = Vec::new();
    for period in Schedule::until_paid(amount, monthly_rate, actual_payment) {
        total_interest += period.interest;
        months_taken = period.number;
        if period.number % 12 == 0 || period.balance <= 0.0 {
            trend.push(TrendDataPoint::stacked(
                format!("Mo {}", period.number),
                (amount - period.balance).min(amount),
                total_interest,
            ));
        }
    }
    if trend.len() > MAX_LOAN_TREND_POINTS {
        trend = trend.into_iter().step_by(2).collect();
    }

    let (unit, details) = if extra > 0.0 {
        (
            format!("Required (Pay {})", money(actual_payment)?),
            format!(
                "Extra payments save you time! Paid off in {} years instead of {}.",
                plain((months_taken as f64 / 12.0).ceil())?,
                fixed(months / 12.0, 1)?
            ),
        )
    } else {
        (
            "Monthly Payment".to_string(),
            format!("Total Interest: {}", money(base_payment * months - amount)?),
        )
    };

    Ok(CalculationResult::new(money(base_payment)?, unit)
        .with_details(details)
        .with_steps([
            format!("Loan: ${}", grouped(amount, 3)?),
            format!("Base Payment: {}", money(base_payment)?),
            format!("Extra: ${}", plain(extra)?),
        ])
        .with_chart(vec![
            ChartDataPoint::new("Principal", amount, palette::PRIMARY),
            ChartDataPoint::new("Total Interest", total_interest, palette::SECONDARY),
        ])
        .with_trend(trend))
}

fn roi(inputs: &Inputs<'_>) -> Outcome {
    let invested = inputs.number("invested");
    let returned = inputs.number("returned");
    let years = inputs.number("years");
    let expenses = inputs.number("expenses");
    let tax_rate = inputs.number("tax_rate");
    let inflation = inputs.number("inflation");

    let gross_profit = returned - invested - expenses;
    let tax = if gross_profit > 0.0 {
        gross_profit * (tax_rate / 100.0)
    } else {
        0.0
    };
    let net_profit = gross_profit - tax;

    let real_net_profit = net_profit / (1.0 + inflation / 100.0).powf(years);
    let total_roi = net_profit / invested * 100.0;
    let annualized = if years > 0.0 {
        (((returned - expenses - tax) / invested).powf(1.0 / years) - 1.0) * 100.0
    } else {
        f64::NAN
    };

    Ok(
        CalculationResult::new(format!("{}%", fixed(total_roi, 2)?), "Total ROI (Nominal)")
            .with_details(format!(
                "Real Profit (Inf. Adj): ${}",
                grouped(real_net_profit, 0)?
            ))
            .with_steps([
                format!("Gross Profit: ${}", grouped(gross_profit, 3)?),
                format!("Tax: {}", money(tax)?),
                format!(
                    "Annualized Return: {}",
                    or_not_available(fixed(annualized, 2).map(|pct| format!("{pct}%")))
                ),
            ])
            .with_chart(vec![
                ChartDataPoint::new("Initial", invested, palette::PRIMARY),
                ChartDataPoint::new("Net Profit", net_profit, palette::SECONDARY),
                ChartDataPoint::new("Tax/Exp", tax + expenses, palette::ACCENT_1),
            ]),
    )
}

fn salary(inputs: &Inputs<'_>) -> Outcome {
    let hourly = inputs.number("hourly");
    let hours = inputs.number("hours");
    let weeks = inputs.number("weeks");
    let overtime_hours = inputs.number("overtime_hours");
    let overtime_rate = inputs.number("overtime_rate");

    let base_weekly = hourly * hours;
    let overtime_weekly = hourly * overtime_rate * overtime_hours;
    let total_weekly = base_weekly + overtime_weekly;
    let annual = total_weekly * weeks;

    Ok(CalculationResult::new(money_grouped(annual, 3)?, "Annual Salary")
        .with_details(format!("Weekly Pay: {}", money_grouped(total_weekly, 3)?))
        .with_steps([
            format!("Base: {}/wk", money_grouped(base_weekly, 3)?),
            format!("Overtime: {}/wk", money_grouped(overtime_weekly, 3)?),
            format!("Worked: {} weeks/yr", plain(weeks)?),
        ])
        .with_chart(vec![
            ChartDataPoint::new("Base Pay", base_weekly * weeks, palette::PRIMARY),
            ChartDataPoint::new("Overtime", overtime_weekly * weeks, palette::SECONDARY),
        ]))
}

fn vat(inputs: &Inputs<'_>) -> Outcome {
    let amount = inputs.number("amount");
    let rate = inputs.number("tax") / 100.0;

    if inputs.text("mode").contains("Remove") {
        let net = amount / (1.0 + rate);
        let tax = amount - net;
        return Ok(CalculationResult::new(money(net)?, "Net Amount (Pre-Tax)")
            .with_details(format!("Tax included was {}", money(tax)?))
            .with_chart(vec![
                ChartDataPoint::new("Net", net, palette::PRIMARY),
                ChartDataPoint::new("Tax", tax, palette::SECONDARY),
            ]));
    }

    let tax = amount * rate;
    Ok(CalculationResult::new(money(amount + tax)?, "Total (Post-Tax)")
        .with_details(format!("Tax added: {}", money(tax)?))
        .with_chart(vec![
            ChartDataPoint::new("Net", amount, palette::PRIMARY),
            ChartDataPoint::new("Tax", tax, palette::SECONDARY),
        ]))
}

fn break_even(inputs: &Inputs<'_>) -> Outcome {
    let fixed_costs = inputs.number("fixed");
    let variable = inputs.number("variable");
    let price = inputs.number("price");
    let expected = inputs.number("expected");

    if price <= variable {
        return Ok(CalculationResult::new("Impossible", "Price too low")
            .with_details("Price must be > Variable Cost"));
    }

    let margin = price - variable;
    let units = fixed_costs / margin;
    let revenue = units * price;

    let details = if expected > 0.0 {
        let profit = expected * price - fixed_costs - expected * variable;
        format!(
            "At {} units, profit is ${}",
            plain(expected)?,
            grouped(profit, 3)?
        )
    } else {
        format!("Revenue needed: ${}", grouped(revenue, 3)?)
    };

    Ok(
        CalculationResult::new(format!("{} Units", grouped(units.ceil(), 3)?), "To Break Even")
            .with_details(details)
            .with_steps([
                format!("Contribution Margin: {}/unit", money(margin)?),
                format!("Fixed Costs: ${}", grouped(fixed_costs, 3)?),
            ])
            .with_chart(vec![
                ChartDataPoint::new("Fixed Cost", fixed_costs, palette::PRIMARY),
                ChartDataPoint::new("Variable (at BE)", units * variable, palette::ACCENT_1),
                ChartDataPoint::new("Revenue (at BE)", revenue, palette::SECONDARY),
            ]),
    )
}

fn margin(inputs: &Inputs<'_>) -> Outcome {
    let cost = inputs.number("cost");
    let revenue = inputs.number("revenue");
    let profit = revenue - cost;

    Ok(
        CalculationResult::new(format!("{}%", fixed(profit / revenue * 100.0, 2)?), "Gross Margin")
            .with_details(format!("Profit: {}", money(profit)?))
            .with_chart(vec![
                ChartDataPoint::new("Cost", cost, palette::PRIMARY),
                ChartDataPoint::new("Profit", profit, palette::SECONDARY),
            ]),
    )
}

fn rule_of_72(inputs: &Inputs<'_>) -> Outcome {
    let rate = inputs.number("rate");

    Ok(
        CalculationResult::new(format!("{} Years", fixed(72.0 / rate, 1)?), "To Double Investment")
            .with_details("Based on Rule of 72")
            .with_steps([format!("72 / {}", plain(rate)?)]),
    )
}

fn credit_payoff(inputs: &Inputs<'_>) -> Outcome {
    let balance = inputs.number("balance");
    let monthly_rate = inputs.number("rate") / 1200.0;
    let payment = inputs.number("payment");

    if payment <= balance * monthly_rate {
        return Ok(CalculationResult::new("Never", "Increase Payment")
            .with_details("Payment covers less than interest."));
    }

    let months = if monthly_rate == 0.0 {
        balance / payment
    } else {
        -(1.0 - monthly_rate * balance / payment).ln() / (1.0 + monthly_rate).ln()
    };

    Ok(
        CalculationResult::new(format!("{} Months", plain(months.ceil())?), "To be Debt Free")
            .with_details(format!(
                "Total Interest: {}",
                money(payment * months - balance)?
            )),
    )
}

fn net_worth(inputs: &Inputs<'_>) -> Outcome {
    let worth = inputs.number("assets") - inputs.number("liabilities");

    Ok(CalculationResult::new(money_grouped(worth, 3)?, "Net Worth")
        .with_details("Assets - Liabilities"))
}

fn inflation(inputs: &Inputs<'_>) -> Outcome {
    let years = inputs.number("years");
    let future = inputs.number("amount") * (1.0 + inputs.number("rate") / 100.0).powf(years);

    Ok(CalculationResult::new(
        money_grouped(future, 3)?,
        format!("Value in {} years", plain(years)?),
    )
    .with_details("Purchasing power change."))
}

fn down_payment(inputs: &Inputs<'_>) -> Outcome {
    let needed = inputs.number("goal") - inputs.number("savings");
    let months = needed / inputs.number("monthly");
    // Years rounded up to the next tenth.
    let years = (months / 12.0 * 10.0).ceil() / 10.0;

    Ok(
        CalculationResult::new(format!("{} Years", plain(years)?), "Time to Reach Goal")
            .with_details(format!("{} months total", plain(months.ceil())?)),
    )
}

fn cd_ladder(inputs: &Inputs<'_>) -> Outcome {
    let deposit = inputs.number("deposit");
    let value = deposit * (1.0 + inputs.number("rate") / 100.0 / 12.0).powf(inputs.number("months"));

    Ok(CalculationResult::new(money(value)?, "Maturity Value")
        .with_details(format!("Profit: {}", money(value - deposit)?)))
}
