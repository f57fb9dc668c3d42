/*!
 * Core Types
 * Common types used across the simulator
 */

/// Simulated time unit (an explicit loop counter, never wall-clock time)
pub type Time = u32;

/// Priority level (1 or higher; interpretation direction is policy-configured)
pub type Priority = u32;
